//! Shared nutrition data structure
//!
//! Used by food items, log entries and daily totals.

use serde::{Deserialize, Serialize};

/// Nutritional information
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
    #[serde(default)]
    pub fiber: f64, // grams
    #[serde(default)]
    pub sugar: f64, // grams
    #[serde(default)]
    pub sodium: f64, // milligrams
}

impl Nutrition {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
            fiber: self.fiber * multiplier,
            sugar: self.sugar * multiplier,
            sodium: self.sodium * multiplier,
        }
    }

    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            fiber: self.fiber + other.fiber,
            sugar: self.sugar + other.sugar,
            sodium: self.sodium + other.sodium,
        }
    }

    /// Copy with every value rounded to one decimal, for display
    pub fn rounded(&self) -> Self {
        let r = |v: f64| (v * 10.0).round() / 10.0;
        Self {
            calories: r(self.calories),
            protein: r(self.protein),
            carbs: r(self.carbs),
            fat: r(self.fat),
            fiber: r(self.fiber),
            sugar: r(self.sugar),
            sodium: r(self.sodium),
        }
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for Nutrition {
    type Output = Nutrition;

    fn mul(self, multiplier: f64) -> Nutrition {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

impl<'a> std::iter::Sum<&'a Nutrition> for Nutrition {
    fn sum<I: Iterator<Item = &'a Nutrition>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + *n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Nutrition {
        Nutrition {
            calories: 105.0,
            protein: 1.3,
            carbs: 27.0,
            fat: 0.4,
            fiber: 3.1,
            sugar: 14.0,
            sodium: 1.0,
        }
    }

    #[test]
    fn test_scale_and_sum() {
        let half = sample() * 0.5;
        assert!((half.calories - 52.5).abs() < 1e-9);
        assert!((half.carbs - 13.5).abs() < 1e-9);

        let total: Nutrition = vec![sample(), sample(), half].into_iter().sum();
        assert!((total.calories - 262.5).abs() < 1e-9);
        assert!((total.fiber - 7.75).abs() < 1e-9);
    }

    #[test]
    fn test_rounded() {
        let n = Nutrition {
            calories: 123.456,
            ..Nutrition::zero()
        };
        assert_eq!(n.rounded().calories, 123.5);
    }
}
