//! Randomly placed dots drifting over the hero. Purely cosmetic.

pub const FLOATING_ELEMENT_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingElement {
    pub id: usize,
    /// Percent of the hero width.
    pub x: f64,
    /// Percent of the hero height.
    pub y: f64,
    /// Seconds.
    pub delay: f64,
    /// Seconds per float cycle.
    pub duration: f64,
}

impl FloatingElement {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation: float {:.2}s ease-in-out infinite; animation-delay: {:.2}s;",
            self.x, self.y, self.duration, self.delay
        )
    }
}

/// `random` must yield values in `[0, 1)`, like `Math.random`.
pub fn scatter(count: usize, mut random: impl FnMut() -> f64) -> Vec<FloatingElement> {
    (0..count)
        .map(|id| FloatingElement {
            id,
            x: random() * 100.0,
            y: random() * 100.0,
            delay: random() * 2.0,
            duration: 3.0 + random() * 2.0,
        })
        .collect()
}

pub fn browser_random() -> f64 {
    web_sys::js_sys::Math::random()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_stay_within_their_ranges() {
        let mut seed = 0.0_f64;
        let elements = scatter(FLOATING_ELEMENT_COUNT, || {
            seed = (seed + 0.37) % 1.0;
            seed
        });

        assert_eq!(elements.len(), FLOATING_ELEMENT_COUNT);
        for (i, e) in elements.iter().enumerate() {
            assert_eq!(e.id, i);
            assert!((0.0..100.0).contains(&e.x));
            assert!((0.0..100.0).contains(&e.y));
            assert!((0.0..2.0).contains(&e.delay));
            assert!((3.0..5.0).contains(&e.duration));
        }
    }

    #[test]
    fn style_positions_the_element() {
        let element = scatter(1, || 0.5)[0];
        assert_eq!(
            element.style(),
            "left: 50.00%; top: 50.00%; animation: float 4.00s ease-in-out infinite; animation-delay: 1.00s;"
        );
    }
}
