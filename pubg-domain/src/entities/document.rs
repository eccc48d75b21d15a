// JSON:API response envelope
// `data` (one resource or a list) and the `included` side objects

use serde_json::Value;

use crate::entities::raw_record::RawRecord;
use crate::error::FatalDecodeFailure;

// A list element that is not an object stays `None` in its position.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimaryData {
    One(RawRecord),
    Many(Vec<Option<RawRecord>>),
}

impl PrimaryData {
    pub fn into_entries(self) -> Vec<Option<RawRecord>> {
        match self {
            PrimaryData::One(record) => vec![Some(record)],
            PrimaryData::Many(entries) => entries,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub data: PrimaryData,
    pub included: Vec<RawRecord>,
}

impl Document {
    pub fn parse(body: &str) -> Result<Self, FatalDecodeFailure> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, FatalDecodeFailure> {
        let root = RawRecord::from_value(value).ok_or(FatalDecodeFailure::NotAnObject)?;

        let data = match root.get("data") {
            None => return Err(FatalDecodeFailure::MissingData),
            Some(Value::Object(fields)) => PrimaryData::One(RawRecord::new(fields.clone())),
            Some(Value::Array(items)) => PrimaryData::Many(
                items
                    .iter()
                    .map(|item| RawRecord::from_value(item.clone()))
                    .collect(),
            ),
            Some(_) => {
                return Err(FatalDecodeFailure::UnexpectedShape(
                    "data is neither an object nor a list".to_string(),
                ))
            }
        };

        // Non-object side objects carry no (type, id) and are dropped here.
        let included = match root.get("included") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| RawRecord::from_value(item.clone()))
                .collect(),
            _ => Vec::new(),
        };

        Ok(Self { data, included })
    }
}
