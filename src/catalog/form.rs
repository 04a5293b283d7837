// ABOUTME: Parsing of raw text food forms into validated FoodItem values
// ABOUTME: Custom food entry and admin catalog entry with numeric validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

use crate::errors::{AppError, AppResult};
use crate::models::FoodItem;
use serde::{Deserialize, Deserializer};

/// Parse one numeric form field
///
/// Blank input is `0` for optional fields and a missing-field error for
/// required ones.
///
/// # Errors
///
/// Returns `MissingRequiredField` for a blank required field and
/// `InvalidNumericInput` for text that is not a finite, non-negative number
pub fn parse_nutrient_field(field: &str, raw: &str, required: bool) -> AppResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return if required {
            Err(AppError::missing_field(field))
        } else {
            Ok(0.0)
        };
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(AppError::invalid_numeric(field, raw)),
    }
}

fn parse_name(raw: &str) -> AppResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::missing_field("name"));
    }
    Ok(name.to_owned())
}

/// Accept either a JSON string or a JSON number for a form field
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

fn optional_text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    text_or_number(deserializer).map(Some)
}

/// User-entered custom food
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomFoodForm {
    /// Food name (required)
    #[serde(default)]
    pub name: String,
    /// Calories (required)
    #[serde(default, deserialize_with = "text_or_number")]
    pub calories: String,
    /// Protein (defaults to 0 when blank)
    #[serde(default, deserialize_with = "text_or_number")]
    pub protein: String,
}

impl CustomFoodForm {
    /// Validate into a food with zero iron and vitamin C
    ///
    /// # Errors
    ///
    /// Returns an error if the name or calories are blank, or a number is invalid
    pub fn into_food_item(self) -> AppResult<FoodItem> {
        let name = parse_name(&self.name)?;
        let calories = parse_nutrient_field("calories", &self.calories, true)?;
        let protein = parse_nutrient_field("protein", &self.protein, false)?;
        Ok(FoodItem::new(name, calories, protein, 0.0, 0.0))
    }
}

/// Administrator catalog entry
///
/// Iron and vitamin C are optional; when absent an update keeps the existing
/// values and an add uses 0.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminFoodForm {
    /// Food name (required)
    #[serde(default)]
    pub name: String,
    /// Calories (required)
    #[serde(default, deserialize_with = "text_or_number")]
    pub calories: String,
    /// Protein (required)
    #[serde(default, deserialize_with = "text_or_number")]
    pub protein: String,
    /// Iron (optional)
    #[serde(default, deserialize_with = "optional_text_or_number")]
    pub iron: Option<String>,
    /// Vitamin C (optional)
    #[serde(
        default,
        rename = "vitaminC",
        deserialize_with = "optional_text_or_number"
    )]
    pub vitamin_c: Option<String>,
}

impl AdminFoodForm {
    /// Validate into a food, taking unspecified micronutrients from `base`
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is blank or a number is invalid
    pub fn into_food_item(self, base: Option<&FoodItem>) -> AppResult<FoodItem> {
        let name = parse_name(&self.name)?;
        let calories = parse_nutrient_field("calories", &self.calories, true)?;
        let protein = parse_nutrient_field("protein", &self.protein, true)?;
        let iron = match self.iron.as_deref() {
            Some(raw) if !raw.trim().is_empty() => parse_nutrient_field("iron", raw, false)?,
            _ => base.map_or(0.0, |food| food.iron),
        };
        let vitamin_c = match self.vitamin_c.as_deref() {
            Some(raw) if !raw.trim().is_empty() => parse_nutrient_field("vitaminC", raw, false)?,
            _ => base.map_or(0.0, |food| food.vitamin_c),
        };
        Ok(FoodItem::new(name, calories, protein, iron, vitamin_c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_blank_optional_field_is_zero() {
        assert!(parse_nutrient_field("protein", "  ", false).unwrap().abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_non_numeric_negative_and_infinite() {
        for raw in ["abc", "-1", "inf", "NaN", "12kcal"] {
            let err = parse_nutrient_field("calories", raw, true).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidNumericInput, "input {raw}");
        }
    }

    #[test]
    fn test_accepts_decimals() {
        let value = parse_nutrient_field("protein", " 4.3 ", true).unwrap();
        assert!((value - 4.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_form_accepts_json_numbers() {
        let form: CustomFoodForm =
            serde_json::from_str(r#"{"name":"Toast","calories":80}"#).unwrap();
        let food = form.into_food_item().unwrap();

        assert!((food.calories - 80.0).abs() < f64::EPSILON);
        assert!(food.protein.abs() < f64::EPSILON);
    }

    #[test]
    fn test_admin_form_keeps_base_micronutrients() {
        let base = FoodItem::new("Spinach (100g)", 23.0, 2.9, 2.7, 28.0);
        let form = AdminFoodForm {
            name: "Spinach".to_owned(),
            calories: "25".to_owned(),
            protein: "3".to_owned(),
            ..AdminFoodForm::default()
        };

        let food = form.into_food_item(Some(&base)).unwrap();
        assert!((food.iron - 2.7).abs() < f64::EPSILON);
        assert!((food.vitamin_c - 28.0).abs() < f64::EPSILON);
    }
}
