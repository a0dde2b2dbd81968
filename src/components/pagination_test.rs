use super::*;

#[test]
fn stepping_back_stops_at_the_first_page() {
    assert_eq!(step_back(3), 2);
    assert_eq!(step_back(2), 1);
    assert_eq!(step_back(1), 1);
}

#[test]
fn stepping_forward_stops_at_the_last_page() {
    assert_eq!(step_forward(1, 3), 2);
    assert_eq!(step_forward(2, 3), 3);
    assert_eq!(step_forward(3, 3), 3);
}

#[test]
fn single_page_never_steps_anywhere() {
    assert_eq!(step_back(1), 1);
    assert_eq!(step_forward(1, 1), 1);
}
