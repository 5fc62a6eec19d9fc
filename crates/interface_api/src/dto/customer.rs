//! Customer DTOs
//!
//! The wire keeps the mixed field naming clients already use: `birthDate`
//! in camel case, `vehicle_value` in snake case. On the quote endpoint
//! `vehicle_value` carries the computed premium; everywhere else it is the
//! stored vehicle value.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use domain_customer::{CustomerDetails, InsuranceQuote};

/// Body of `POST /customers/quote`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CustomerWrapper {
    #[validate(nested)]
    pub customer: CustomerInputDto,
}

/// Customer input, as sent on quote and update
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CustomerInputDto {
    #[validate(custom(function = "not_blank", message = "name must not be blank"))]
    pub name: String,

    #[validate(custom(function = "not_blank", message = "document must not be blank"))]
    pub document: String,

    #[serde(rename = "birthDate")]
    pub birth_date: NaiveDate,

    #[validate(custom(function = "not_blank", message = "location must not be blank"))]
    pub location: String,

    #[validate(range(min = 0.0, message = "vehicle_value must not be negative"))]
    pub vehicle_value: f64,
}

/// Quote or customer view returned by every endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerOutputDto {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<i64>,
    pub name: String,
    pub location: String,
    pub vehicle_value: f64,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

impl From<CustomerInputDto> for CustomerDetails {
    fn from(dto: CustomerInputDto) -> Self {
        CustomerDetails {
            name: dto.name,
            document: dto.document,
            birth_date: dto.birth_date,
            location: dto.location,
            vehicle_value: dto.vehicle_value,
        }
    }
}

impl From<InsuranceQuote> for CustomerOutputDto {
    fn from(quote: InsuranceQuote) -> Self {
        CustomerOutputDto {
            id: quote.id.map(|id| id.value()),
            name: quote.name,
            location: quote.location,
            vehicle_value: quote.amount.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::CustomerId;
    use domain_customer::QuoteAmount;
    use serde_json::json;

    fn input(name: &str, vehicle_value: f64) -> CustomerInputDto {
        CustomerInputDto {
            name: name.to_string(),
            document: "12345678900".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            location: "SP".to_string(),
            vehicle_value,
        }
    }

    #[test]
    fn test_input_reads_birth_date_in_camel_case() {
        let dto: CustomerInputDto = serde_json::from_value(json!({
            "name": "Jonatan",
            "document": "12345678900",
            "birthDate": "1990-01-01",
            "location": "SP",
            "vehicle_value": 50000
        }))
        .unwrap();

        assert_eq!(dto.birth_date, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
        assert_eq!(dto.vehicle_value, 50000.0);
    }

    #[test]
    fn test_blank_name_fails_validation() {
        assert!(input("   ", 1000.0).validate().is_err());
        assert!(input("Jonatan", 1000.0).validate().is_ok());
    }

    #[test]
    fn test_negative_value_fails_but_zero_passes() {
        assert!(input("Jonatan", -1.0).validate().is_err());
        assert!(input("Jonatan", 0.0).validate().is_ok());
    }

    #[test]
    fn test_wrapper_validates_nested_customer() {
        let wrapper = CustomerWrapper {
            customer: input("", 1000.0),
        };
        assert!(wrapper.validate().is_err());
    }

    #[test]
    fn test_output_omits_missing_id() {
        let dto = CustomerOutputDto::from(InsuranceQuote::premium("Jonatan", "SP", 2500.0));
        let value = serde_json::to_value(&dto).unwrap();

        assert!(value.get("id").is_none());
        assert_eq!(value["vehicle_value"], 2500.0);
    }

    #[test]
    fn test_output_carries_stored_id() {
        let quote = InsuranceQuote {
            id: Some(CustomerId::new(3)),
            name: "Joao".to_string(),
            location: "RJ".to_string(),
            amount: QuoteAmount::VehicleValue(60000.0),
        };
        let value = serde_json::to_value(CustomerOutputDto::from(quote)).unwrap();

        assert_eq!(value["id"], 3);
        assert_eq!(value["vehicle_value"], 60000.0);
    }
}
