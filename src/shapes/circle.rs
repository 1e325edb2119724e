#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        assert!(radius >= 0.0, "Circle radius cannot be negative");
        Self { radius }
    }
}
