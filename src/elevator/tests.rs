/*
 * Unit tests for the elevator module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_car_init
 * - test_car_accept_pickup_above
 * - test_car_accept_pickup_below
 * - test_car_accept_immediate_boarding
 * - test_car_services_request_then_parks
 * - test_car_reverses_for_opposite_commitment
 * - test_car_bound_never_shrinks_mid_run
 * - test_car_mid_route_pickup_extends_bound
 * - test_car_idle_implies_no_pending
 *
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod tests {
    use crate::elevator::{Car, Motion};
    use crate::shared::{Direction, Request};

    fn setup_car() -> Car {
        // Seven floors, parked at floor 0, matching the default building
        Car::new(7)
    }

    #[test]
    fn test_car_init() {
        // Purpose: Verify the resting state of a freshly built car

        // Arrange / Act
        let car = setup_car();

        // Assert
        assert_eq!(car.floor(), 0);
        assert_eq!(car.motion(), Motion::Idle);
        assert_eq!(car.direction(), Direction::Idle);
        assert_eq!(car.target_summary(), "");
        assert_eq!(car.pending_summary(), "");
    }

    #[test]
    fn test_car_accept_pickup_above() {
        // Purpose: Verify that an idle car heads up toward a pickup above it

        // Arrange
        let mut car = setup_car();

        // Act
        car.accept(Request::new(2, 5));

        // Assert
        assert_eq!(
            car.motion(),
            Motion::Up {
                bound: 2,
                below: None
            }
        );
        assert_eq!(car.target_summary(), "Go up to 3");
        assert_eq!(car.pending_summary(), "3 -> 6");
    }

    #[test]
    fn test_car_accept_pickup_below() {
        // Purpose: Verify that an idle car heads down toward a pickup below it

        // Arrange
        let mut car = setup_car();
        car.test_set_floor(6);

        // Act
        car.accept(Request::new(4, 1));

        // Assert
        assert_eq!(
            car.motion(),
            Motion::Down {
                bound: 4,
                above: None
            }
        );
        assert_eq!(car.test_pending_count(), 1);
    }

    #[test]
    fn test_car_accept_immediate_boarding() {
        // Purpose: Verify that a pickup at the current floor boards at once,
        // leaving the destination as the only commitment

        // Arrange
        let mut car = setup_car();
        car.test_set_floor(3);

        // Act
        car.accept(Request::new(3, 0));

        // Assert
        assert_eq!(
            car.motion(),
            Motion::Down {
                bound: 0,
                above: None
            }
        );
        // Already boarded, so nothing is pending at floor 3
        assert_eq!(car.test_pending_count(), 0);
    }

    #[test]
    fn test_car_services_request_then_parks() {
        // Purpose: Walk a single request (floor 2 -> floor 5) to completion
        // and verify every intermediate state

        // Arrange
        let mut car = setup_car();
        car.accept(Request::new(2, 5));

        // Act / Assert
        // Two steps up to the pickup floor
        assert!(car.advance());
        assert_eq!(car.floor(), 1);
        assert_eq!(
            car.motion(),
            Motion::Up {
                bound: 2,
                below: None
            }
        );

        assert!(car.advance());
        assert_eq!(car.floor(), 2);
        // Boarding extended the bound to the destination
        assert_eq!(
            car.motion(),
            Motion::Up {
                bound: 5,
                below: None
            }
        );
        assert_eq!(car.test_pending_count(), 0);

        // Three more steps to the drop-off, then park
        for expected_floor in 3..=5 {
            assert!(car.advance());
            assert_eq!(car.floor(), expected_floor);
        }
        assert_eq!(car.motion(), Motion::Idle);

        // Parked for good: further steps are no-ops
        assert!(!car.advance());
        assert_eq!(car.floor(), 5);
    }

    #[test]
    fn test_car_reverses_for_opposite_commitment() {
        // Purpose: Verify that a car exhausting its bound reverses when the
        // boarded passenger's destination lies behind it

        // Arrange
        let mut car = setup_car();
        car.test_set_floor(5);
        car.accept(Request::new(2, 6));

        // Act
        // Down to the pickup at floor 2
        car.advance();
        car.advance();
        car.advance();

        // Assert
        // Boarding at the bound floor flips the car toward floor 6
        assert_eq!(car.floor(), 2);
        assert_eq!(
            car.motion(),
            Motion::Up {
                bound: 6,
                below: None
            }
        );

        // Ride it out: four steps up, then parked
        for _ in 0..4 {
            car.advance();
        }
        assert_eq!(car.floor(), 6);
        assert_eq!(car.motion(), Motion::Idle);
    }

    #[test]
    fn test_car_bound_never_shrinks_mid_run() {
        // Purpose: Verify boundary monotonicity within one directional run

        // Arrange
        let mut car = setup_car();
        car.accept(Request::new(5, 6));

        // Act
        // A nearer pickup must not pull the bound back
        car.accept(Request::new(2, 3));

        // Assert
        assert_eq!(
            car.motion(),
            Motion::Up {
                bound: 5,
                below: None
            }
        );

        // A farther pickup widens it
        car.accept(Request::new(6, 1));
        assert_eq!(
            car.motion(),
            Motion::Up {
                bound: 6,
                below: None
            }
        );
    }

    #[test]
    fn test_car_mid_route_pickup_extends_bound() {
        // Purpose: Verify that a request accepted mid-route becomes a new
        // commitment once its origin floor is reached

        // Arrange
        let mut car = setup_car();
        car.test_set_floor(3);
        car.accept(Request::new(4, 5));
        car.advance();
        assert_eq!(car.floor(), 4);
        assert_eq!(
            car.motion(),
            Motion::Up {
                bound: 5,
                below: None
            }
        );

        // Act
        // New request while moving through floor 5, destination beyond the bound
        car.accept(Request::new(5, 6));
        car.advance();

        // Assert
        assert_eq!(car.floor(), 5);
        assert_eq!(car.test_pending_count(), 0);
        assert_eq!(
            car.motion(),
            Motion::Up {
                bound: 6,
                below: None
            }
        );
    }

    #[test]
    fn test_car_idle_implies_no_pending() {
        // Purpose: Verify the idle invariant - a parked car holds no pending
        // pickups and no bound

        // Arrange
        let mut car = setup_car();
        car.accept(Request::new(1, 4));
        car.accept(Request::new(2, 3));

        // Act
        // More than enough steps to finish everything
        for _ in 0..10 {
            car.advance();
        }

        // Assert
        assert_eq!(car.motion(), Motion::Idle);
        assert_eq!(car.test_pending_count(), 0);
        assert_eq!(car.target_summary(), "");
        assert_eq!(car.pending_summary(), "");
    }
}
