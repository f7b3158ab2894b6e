//! Customer record schema
//!
//! One validated bank-customer record per prediction request. The column
//! order declared in `FEATURE_COLUMNS` is the order the preprocessor was
//! fitted on, so `to_row` must never reorder fields.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Column names in the exact order the preprocessor expects
pub const FEATURE_COLUMNS: [&str; 10] = [
    "CreditScore",
    "Geography",
    "Gender",
    "Age",
    "Tenure",
    "Balance",
    "NumOfProducts",
    "HasCrCard",
    "IsActiveMember",
    "EstimatedSalary",
];

/// Countries seen by the fitted preprocessor
pub const GEOGRAPHIES: [&str; 3] = ["France", "Germany", "Spain"];

/// Gender values seen by the fitted preprocessor
pub const GENDERS: [&str; 2] = ["Male", "Female"];

/// One customer record, as received in the request body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerRecord {
    pub credit_score: i64,

    #[validate(custom(function = validate_geography))]
    pub geography: String,

    #[validate(custom(function = validate_gender))]
    pub gender: String,

    #[validate(range(min = 18, max = 100))]
    pub age: i64,

    #[validate(range(min = 0, max = 10))]
    pub tenure: i64,

    #[validate(range(min = 0.0))]
    pub balance: f64,

    #[validate(range(min = 1, max = 4))]
    pub num_of_products: i64,

    #[validate(range(min = 0, max = 1))]
    pub has_cr_card: u8,

    #[validate(range(min = 0, max = 1))]
    pub is_active_member: u8,

    pub estimated_salary: f64,
}

fn validate_geography(value: &str) -> Result<(), ValidationError> {
    if GEOGRAPHIES.contains(&value) {
        return Ok(());
    }
    let mut err = ValidationError::new("geography");
    err.message = Some("must be one of France, Germany, Spain".into());
    Err(err)
}

fn validate_gender(value: &str) -> Result<(), ValidationError> {
    if GENDERS.contains(&value) {
        return Ok(());
    }
    let mut err = ValidationError::new("gender");
    err.message = Some("must be one of Male, Female".into());
    Err(err)
}

/// Map a Rust field ident back to its JSON (column) name for diagnostics
pub fn json_field_name(field: &str) -> &str {
    match field {
        "credit_score" => "CreditScore",
        "geography" => "Geography",
        "gender" => "Gender",
        "age" => "Age",
        "tenure" => "Tenure",
        "balance" => "Balance",
        "num_of_products" => "NumOfProducts",
        "has_cr_card" => "HasCrCard",
        "is_active_member" => "IsActiveMember",
        "estimated_salary" => "EstimatedSalary",
        other => other,
    }
}

/// One raw cell of the tabular row handed to the preprocessor
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Text(String),
}

/// A named cell
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub column: &'static str,
    pub value: CellValue,
}

/// A single tabular row with columns in `FEATURE_COLUMNS` order
#[derive(Debug, Clone, PartialEq)]
pub struct RecordRow {
    cells: Vec<Cell>,
}

impl RecordRow {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|c| c.column == column)
            .map(|c| &c.value)
    }
}

impl CustomerRecord {
    /// Build the single-row tabular structure for the preprocessor.
    /// Values are taken verbatim; encoding and scaling are the
    /// preprocessor's job.
    pub fn to_row(&self) -> RecordRow {
        RecordRow {
            cells: vec![
                Cell {
                    column: "CreditScore",
                    value: CellValue::Int(self.credit_score),
                },
                Cell {
                    column: "Geography",
                    value: CellValue::Text(self.geography.clone()),
                },
                Cell {
                    column: "Gender",
                    value: CellValue::Text(self.gender.clone()),
                },
                Cell {
                    column: "Age",
                    value: CellValue::Int(self.age),
                },
                Cell {
                    column: "Tenure",
                    value: CellValue::Int(self.tenure),
                },
                Cell {
                    column: "Balance",
                    value: CellValue::Float(self.balance),
                },
                Cell {
                    column: "NumOfProducts",
                    value: CellValue::Int(self.num_of_products),
                },
                Cell {
                    column: "HasCrCard",
                    value: CellValue::Int(self.has_cr_card as i64),
                },
                Cell {
                    column: "IsActiveMember",
                    value: CellValue::Int(self.is_active_member as i64),
                },
                Cell {
                    column: "EstimatedSalary",
                    value: CellValue::Float(self.estimated_salary),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CustomerRecord {
        CustomerRecord {
            credit_score: 650,
            geography: "France".to_string(),
            gender: "Female".to_string(),
            age: 40,
            tenure: 5,
            balance: 50_000.0,
            num_of_products: 2,
            has_cr_card: 1,
            is_active_member: 1,
            estimated_salary: 60_000.0,
        }
    }

    #[test]
    fn valid_record_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn age_below_minimum_names_age() {
        let mut record = sample();
        record.age = 15;
        let errors = record.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("age"));
    }

    #[test]
    fn age_above_maximum_rejected() {
        let mut record = sample();
        record.age = 101;
        assert!(record.validate().is_err());
    }

    #[test]
    fn unknown_geography_names_geography() {
        let mut record = sample();
        record.geography = "Italy".to_string();
        let errors = record.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("geography"));
    }

    #[test]
    fn unknown_gender_rejected() {
        let mut record = sample();
        record.gender = "Other".to_string();
        let errors = record.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("gender"));
    }

    #[test]
    fn tenure_out_of_range_rejected() {
        let mut record = sample();
        record.tenure = 11;
        assert!(record.validate().is_err());
    }

    #[test]
    fn negative_balance_rejected() {
        let mut record = sample();
        record.balance = -1.0;
        assert!(record.validate().is_err());
    }

    #[test]
    fn num_of_products_out_of_range_rejected() {
        let mut record = sample();
        record.num_of_products = 0;
        assert!(record.validate().is_err());
        record.num_of_products = 5;
        assert!(record.validate().is_err());
    }

    #[test]
    fn binary_flags_rejected_outside_zero_one() {
        let mut record = sample();
        record.has_cr_card = 2;
        let errors = record.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("has_cr_card"));

        let mut record = sample();
        record.is_active_member = 3;
        assert!(record.validate().is_err());
    }

    #[test]
    fn all_violations_reported_at_once() {
        let mut record = sample();
        record.age = 15;
        record.geography = "Italy".to_string();
        record.tenure = 99;
        let errors = record.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("age"));
        assert!(fields.contains_key("geography"));
        assert!(fields.contains_key("tenure"));
    }

    #[test]
    fn row_columns_match_declared_order() {
        let row = sample().to_row();
        let columns: Vec<&str> = row.cells().iter().map(|c| c.column).collect();
        assert_eq!(columns, FEATURE_COLUMNS);
    }

    #[test]
    fn row_values_taken_verbatim() {
        let row = sample().to_row();
        assert_eq!(row.get("CreditScore"), Some(&CellValue::Int(650)));
        assert_eq!(
            row.get("Geography"),
            Some(&CellValue::Text("France".to_string()))
        );
        assert_eq!(row.get("Balance"), Some(&CellValue::Float(50_000.0)));
        assert_eq!(row.get("HasCrCard"), Some(&CellValue::Int(1)));
    }

    #[test]
    fn json_names_use_pascal_case() {
        let record: CustomerRecord = serde_json::from_value(serde_json::json!({
            "CreditScore": 650,
            "Geography": "France",
            "Gender": "Female",
            "Age": 40,
            "Tenure": 5,
            "Balance": 50000.0,
            "NumOfProducts": 2,
            "HasCrCard": 1,
            "IsActiveMember": 1,
            "EstimatedSalary": 60000.0
        }))
        .unwrap();
        assert_eq!(record.age, 40);
        assert_eq!(json_field_name("age"), "Age");
        assert_eq!(json_field_name("num_of_products"), "NumOfProducts");
    }
}
