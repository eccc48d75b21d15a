// Telemetry event decoder
// One output entry per input record, in input order; never aborts the batch

use std::collections::BTreeMap;

use serde_json::Value;

use crate::entities::{
    Common, DecodedEvent, EventEnvelope, InvalidEvent, RawRecord, TelemetryEvent, UnknownEvent,
};
use crate::error::{EventDecodeError, FatalDecodeFailure};
use crate::services::event_registry::EventRegistry;
use crate::utils::parse_timestamp;

pub fn decode_events(records: &[RawRecord]) -> Vec<DecodedEvent> {
    records.iter().map(decode_record).collect()
}

pub fn decode_record(record: &RawRecord) -> DecodedEvent {
    let Some(discriminator) = record.str_field("_T") else {
        return invalid(record, EventDecodeError::MissingDiscriminator);
    };
    let Some(shape) = EventRegistry::global().shape_for(discriminator) else {
        return DecodedEvent::Unknown(UnknownEvent {
            discriminator: discriminator.to_string(),
            record: record.clone(),
        });
    };

    let envelope = match decode_envelope(record, discriminator) {
        Ok(envelope) => envelope,
        Err(reason) => return invalid(record, reason),
    };

    match shape.decode(record) {
        Ok(body) => DecodedEvent::Event(TelemetryEvent { envelope, body }),
        Err(err) => invalid(
            record,
            EventDecodeError::InvalidField {
                discriminator: discriminator.to_string(),
                reason: err.to_string(),
            },
        ),
    }
}

pub fn decode_values(values: Vec<Value>) -> Vec<DecodedEvent> {
    values
        .into_iter()
        .map(|value| match value {
            Value::Object(fields) => decode_record(&RawRecord::new(fields)),
            other => DecodedEvent::Invalid(InvalidEvent {
                raw: other,
                reason: EventDecodeError::NotAnObject,
            }),
        })
        .collect()
}

pub fn decode_telemetry(body: &str) -> Result<Vec<DecodedEvent>, FatalDecodeFailure> {
    match serde_json::from_str::<Value>(body)? {
        Value::Array(values) => Ok(decode_values(values)),
        _ => Err(FatalDecodeFailure::UnexpectedShape(
            "telemetry body is not a list".to_string(),
        )),
    }
}

fn decode_envelope(record: &RawRecord, discriminator: &str) -> Result<EventEnvelope, EventDecodeError> {
    let schema_version = record
        .i64_field("_V")
        .ok_or_else(|| envelope_field_error(record, discriminator, "_V", "an integer"))?;
    let raw_timestamp = record
        .str_field("_D")
        .ok_or_else(|| envelope_field_error(record, discriminator, "_D", "a string"))?;
    let timestamp =
        parse_timestamp(raw_timestamp).map_err(|err| EventDecodeError::InvalidTimestamp {
            value: raw_timestamp.to_string(),
            reason: err.to_string(),
        })?;
    let common = record
        .object("common")
        .and_then(|common| common.decode::<Common>().ok());

    Ok(EventEnvelope {
        schema_version,
        timestamp,
        discriminator: discriminator.to_string(),
        common,
    })
}

// Absent fields and fields of the wrong JSON type are reported apart.
fn envelope_field_error(
    record: &RawRecord,
    discriminator: &str,
    field: &'static str,
    expected: &str,
) -> EventDecodeError {
    if record.contains(field) {
        EventDecodeError::InvalidField {
            discriminator: discriminator.to_string(),
            reason: format!("`{}` is not {}", field, expected),
        }
    } else {
        EventDecodeError::MissingField(field)
    }
}

fn invalid(record: &RawRecord, reason: EventDecodeError) -> DecodedEvent {
    DecodedEvent::Invalid(InvalidEvent {
        raw: record.clone().into_value(),
        reason,
    })
}

pub fn group_by_attack(events: &[DecodedEvent]) -> BTreeMap<i64, Vec<&TelemetryEvent>> {
    let mut groups: BTreeMap<i64, Vec<&TelemetryEvent>> = BTreeMap::new();
    for event in events.iter().filter_map(DecodedEvent::as_event) {
        if let Some(attack_id) = event.body.attack_id() {
            groups.entry(attack_id).or_default().push(event);
        }
    }
    groups
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeSummary {
    pub events: usize,
    pub unknown: usize,
    pub invalid: usize,
    pub by_discriminator: BTreeMap<String, usize>,
}

impl DecodeSummary {
    pub fn total(&self) -> usize {
        self.events + self.unknown + self.invalid
    }
}

pub fn summarize(events: &[DecodedEvent]) -> DecodeSummary {
    let mut summary = DecodeSummary::default();
    for entry in events {
        match entry {
            DecodedEvent::Event(event) => {
                summary.events += 1;
                *summary
                    .by_discriminator
                    .entry(event.discriminator().to_string())
                    .or_default() += 1;
            }
            DecodedEvent::Unknown(unknown) => {
                summary.unknown += 1;
                *summary
                    .by_discriminator
                    .entry(unknown.discriminator.clone())
                    .or_default() += 1;
            }
            DecodedEvent::Invalid(_) => summary.invalid += 1,
        }
    }
    summary
}
