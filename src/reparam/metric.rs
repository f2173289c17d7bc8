use crate::core::Point;

/// Euklidischer Abstand zweier Punkte gleicher Dimension.
///
/// Skaliert mit der größten Komponentendifferenz, damit das Quadrieren großer
/// Werte nicht überläuft. Unendlich nur, wenn schon eine Differenz überläuft.
pub fn distance(a: &Point, b: &Point) -> f64 {
    let scale = a
        .coords()
        .iter()
        .zip(b.coords())
        .map(|(x, y)| (y - x).abs())
        .fold(0.0, f64::max);
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }

    let sum = a
        .coords()
        .iter()
        .zip(b.coords())
        .map(|(x, y)| {
            let d = (y - x) / scale;
            d * d
        })
        .sum::<f64>();
    scale * sum.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_3_4_5() {
        assert_relative_eq!(
            distance(&Point::from([0.0, 0.0]), &Point::from([3.0, 4.0])),
            5.0
        );
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = Point::from([1.5, -2.0, 7.25]);
        assert_eq!(distance(&p, &p), 0.0);
    }

    #[test]
    fn test_distance_does_not_overflow_for_large_coordinates() {
        let a = Point::from([-1e200, 0.0]);
        let b = Point::from([1e200, 0.0]);
        assert_relative_eq!(distance(&a, &b), 2e200);

        let c = Point::from([3e300, 4e300]);
        assert_relative_eq!(distance(&Point::zeros(2), &c), 5e300, max_relative = 1e-15);
    }

    #[test]
    fn test_distance_overflowing_difference_is_infinite() {
        let a = Point::from([-1.7e308]);
        let b = Point::from([1.7e308]);
        assert_eq!(distance(&a, &b), f64::INFINITY);
    }

    #[test]
    fn test_distance_is_symmetric_and_non_negative() {
        let a = Point::from([1.0, 2.0, 3.0]);
        let b = Point::from([-4.0, 6.0, 8.0]);
        assert!(distance(&a, &b) >= 0.0);
        assert_relative_eq!(distance(&a, &b), distance(&b, &a));
        assert_relative_eq!(distance(&a, &b), 66.0f64.sqrt());
    }
}
