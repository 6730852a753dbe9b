use strafe_core::{
    best_strafe_max_accel, max_accel_theta, side_strafe_max_accel, MoveButton, MovementVars,
    PlayerData, PositionType,
};

fn default_vars() -> MovementVars {
    MovementVars {
        accelerate: 10.0,
        airaccelerate: 10.0,
        ent_friction: 1.0,
        frametime: 0.01,
    }
}

fn speed_sq(velocity: [f32; 2]) -> f32 {
    velocity[0] * velocity[0] + velocity[1] * velocity[1]
}

#[test]
fn standstill_ground_start_accelerates_forward() {
    let vars = default_vars();
    let mut player = PlayerData::default();

    // From a standstill the optimal theta is straight ahead.
    assert_eq!(
        max_accel_theta(&player, &vars, PositionType::Ground, 320.0),
        0.0
    );

    let yaw = side_strafe_max_accel(
        &mut player,
        &vars,
        PositionType::Ground,
        320.0,
        MoveButton::Forward,
        0.0,
        false,
    );

    // One frame from rest gains at most accelerate * wishspeed * friction *
    // frametime = 32 units/second along the chosen discretized direction.
    let dir = [yaw.cos(), yaw.sin()];
    let along = f64::from(player.velocity[0]) * dir[0] + f64::from(player.velocity[1]) * dir[1];
    assert!(speed_sq(player.velocity) > 0.0);
    assert!(along > 0.0);
    assert!(along <= 32.0 + 1e-4, "gained {along} along yaw {yaw}");
}

#[test]
fn air_strafing_gains_speed_every_frame() {
    let vars = default_vars();
    let mut player = PlayerData {
        velocity: [100.0, 0.0],
    };

    let mut last_sq = speed_sq(player.velocity);
    for frame in 0..100 {
        best_strafe_max_accel(
            &mut player,
            &vars,
            PositionType::Air,
            320.0,
            MoveButton::Forward,
            0.0,
        );
        let now_sq = speed_sq(player.velocity);
        assert!(
            now_sq > last_sq,
            "speed dropped at frame {frame}: {last_sq} -> {now_sq}"
        );
        last_sq = now_sq;
    }

    // 100 frames of near-30 gain perpendicular to the velocity.
    assert!(last_sq > 90_000.0, "final speed^2 only {last_sq}");
}

#[test]
fn bidirectional_result_beats_both_single_sides() {
    let vars = default_vars();
    let start = PlayerData {
        velocity: [250.0, -60.0],
    };

    for postype in [PositionType::Ground, PositionType::Air] {
        let mut left = start;
        side_strafe_max_accel(&mut left, &vars, postype, 320.0, MoveButton::Forward, 0.0, false);
        let mut right = start;
        side_strafe_max_accel(&mut right, &vars, postype, 320.0, MoveButton::Forward, 0.0, true);

        let mut best = start;
        best_strafe_max_accel(&mut best, &vars, postype, 320.0, MoveButton::Forward, 0.0);

        assert!(speed_sq(best.velocity) >= speed_sq(left.velocity));
        assert!(speed_sq(best.velocity) >= speed_sq(right.velocity));
    }
}

#[test]
fn selector_yaws_come_back_normalized() {
    let vars = default_vars();
    let starts = [
        [100.0_f32, 0.0],
        [-100.0, 0.0],
        [0.0, -100.0],
        [-70.0, -70.0],
        [55.0, -250.0],
    ];

    for velocity in starts {
        for right in [false, true] {
            let mut player = PlayerData { velocity };
            let yaw = side_strafe_max_accel(
                &mut player,
                &vars,
                PositionType::Air,
                320.0,
                MoveButton::Forward,
                0.0,
                right,
            );
            assert!(
                yaw > -core::f64::consts::PI && yaw <= core::f64::consts::PI,
                "unnormalized yaw {yaw} from start {velocity:?}"
            );
        }
    }
}

#[test]
fn same_inputs_produce_identical_frames() {
    let vars = default_vars();

    let run = || {
        let mut player = PlayerData {
            velocity: [37.5, -12.25],
        };
        let mut yaws = Vec::new();
        for _ in 0..50 {
            yaws.push(best_strafe_max_accel(
                &mut player,
                &vars,
                PositionType::Air,
                320.0,
                MoveButton::ForwardLeft,
                0.2,
            ));
        }
        (player, yaws)
    };

    let (player_a, yaws_a) = run();
    let (player_b, yaws_b) = run();
    assert_eq!(player_a, player_b);
    assert_eq!(yaws_a, yaws_b);
}

#[test]
fn movement_config_round_trips_through_json() {
    let vars = default_vars();
    let encoded = serde_json::to_string(&vars).expect("serialize vars");
    let decoded: MovementVars = serde_json::from_str(&encoded).expect("deserialize vars");
    assert_eq!(vars, decoded);

    let player = PlayerData {
        velocity: [123.5, -0.25],
    };
    let encoded = serde_json::to_string(&player).expect("serialize player");
    let decoded: PlayerData = serde_json::from_str(&encoded).expect("deserialize player");
    assert_eq!(player, decoded);
}
