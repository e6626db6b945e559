use elevator_fleet::{Direction, FleetController};

async fn single(floor: u8, direction: Direction) -> FleetController {
    let ecs = FleetController::new(1, 6).unwrap();
    ecs.set_elevator_state(0, floor, direction).await;
    ecs
}

async fn steps(ecs: &FleetController, n: usize) {
    for _ in 0..n {
        ecs.step().await;
    }
}

// Elevator and request share a direction and the pickup is still ahead.
#[tokio::test]
async fn pickup_same_direction_approaching() {
    let ecs = single(1, Direction::Up).await;
    ecs.pickup(3, 5).await.unwrap();
    assert_eq!(ecs.pickup(3, 5).await.unwrap(), 2);
}

// Same direction, but the elevator has already passed the pickup floor.
#[tokio::test]
async fn pickup_same_direction_passed() {
    let ecs = single(3, Direction::Up).await;
    ecs.disable_preempt_adjust().await;
    assert_eq!(ecs.pickup(5, 6).await.unwrap(), 2);
    assert_eq!(ecs.pickup(3, 5).await.unwrap(), 4);
}

#[tokio::test]
async fn pickup_opposite_direction() {
    let ecs = single(4, Direction::Up).await;
    ecs.disable_preempt_adjust().await;
    assert_eq!(ecs.pickup(5, 6).await.unwrap(), 1);
    assert_eq!(ecs.pickup(3, 1).await.unwrap(), 3);
}

// Down 4 floors to board, then up 5 floors to the destination.
#[tokio::test]
async fn scan_reaches_top_after_nine_steps() {
    let ecs = single(5, Direction::Down).await;
    ecs.pickup(1, 6).await.unwrap();
    steps(&ecs, 9).await;
    assert_eq!(ecs.status().await[0].current_floor, 6);
}

#[tokio::test]
async fn idle_elevator_parks_at_middle_floor() {
    let ecs = FleetController::new(1, 6).unwrap();
    ecs.pickup(1, 5).await.unwrap();
    steps(&ecs, 10).await;
    let status = &ecs.status().await[0];
    assert!(status.is_idle());
    assert_eq!(status.current_floor, 6 / 2);
}

#[tokio::test]
async fn second_request_goes_to_free_elevator() {
    let ecs = FleetController::new(2, 6).unwrap();
    ecs.disable_randomizing().await;

    ecs.pickup(1, 6).await.unwrap();
    steps(&ecs, 3).await;
    assert!(!ecs.is_idle(0).await);
    assert!(ecs.is_idle(1).await);

    ecs.pickup(4, 1).await.unwrap();
    steps(&ecs, 2).await;
    assert!(!ecs.is_idle(0).await);
    assert!(!ecs.is_idle(1).await);
}
