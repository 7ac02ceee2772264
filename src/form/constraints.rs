//! Input-level checks that block submission: required, URL type, numeric
//! min and step. Nothing semantic (key formats, address checksums) is
//! checked here.

use std::str::FromStr;

use reqwest::Url;
use rust_decimal::prelude::*;

use crate::error::ConstraintViolation;
use super::draft::TraderDraft;
use super::field::{FieldKey, FieldValue};
use super::visibility::{visible_fields, FieldSpec, InputKind};

/// First violation among the visible fields, in render order.
pub fn check_draft(draft: &TraderDraft) -> Result<(), ConstraintViolation> {
    visible_fields(draft.ai_model, draft.exchange)
        .iter()
        .try_for_each(|spec| check_field(spec, draft))
}

fn check_field(spec: &FieldSpec, draft: &TraderDraft) -> Result<(), ConstraintViolation> {
    match (spec.kind, draft.field(spec.key)) {
        (InputKind::Text | InputKind::Password, FieldValue::Text(text)) => {
            check_required(spec, &text)
        }
        (InputKind::Url, FieldValue::Text(text)) => {
            check_required(spec, &text)?;
            if !text.is_empty() && Url::parse(&text).is_err() {
                return Err(ConstraintViolation::InvalidUrl(spec.key));
            }
            Ok(())
        }
        (InputKind::Number { min, step }, FieldValue::Decimal(value)) => {
            check_range(spec.key, value, min, step)
        }
        (InputKind::Number { min, step }, FieldValue::Integer(value)) => {
            check_range(spec.key, Decimal::from(value), min, step)
        }
        _ => Ok(()),
    }
}

fn check_required(spec: &FieldSpec, text: &str) -> Result<(), ConstraintViolation> {
    if spec.required && text.is_empty() {
        return Err(ConstraintViolation::Missing(spec.key));
    }
    Ok(())
}

fn check_range(
    key: FieldKey,
    value: Decimal,
    min: Decimal,
    step: Decimal,
) -> Result<(), ConstraintViolation> {
    if value < min {
        return Err(ConstraintViolation::BelowMin { key, min });
    }
    if !((value - min) % step).is_zero() {
        return Err(ConstraintViolation::StepMismatch { key, step });
    }
    Ok(())
}

/// Parse the text of a numeric input into the value its field stores.
pub fn parse_number(spec: &FieldSpec, text: &str) -> Result<FieldValue, ConstraintViolation> {
    let InputKind::Number { min, step } = spec.kind else {
        return Err(ConstraintViolation::NotANumber(spec.key));
    };
    let text = text.trim();
    if text.is_empty() {
        return Err(ConstraintViolation::Missing(spec.key));
    }
    // Number inputs also take exponent notation such as "1e3".
    let value = Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| ConstraintViolation::NotANumber(spec.key))?;
    check_range(spec.key, value, min, step)?;

    match spec.key {
        FieldKey::ScanIntervalMinutes => value
            .to_u32()
            .map(FieldValue::Integer)
            .ok_or(ConstraintViolation::OutOfRange(spec.key)),
        _ => Ok(FieldValue::Decimal(value.normalize())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    use crate::form::{field_spec, visible_fields, AiModel, Exchange};

    fn filled_default() -> TraderDraft {
        let mut draft = TraderDraft::default();
        draft.id = "hl_ds_2".into();
        draft.name = "Trader 2".into();
        draft.ai_keys.deepseek_key = "sk-1".into();
        draft.exchange_keys.hyperliquid_private_key = "0xabc".into();
        draft.exchange_keys.hyperliquid_wallet_addr = "0xdef".into();
        draft
    }

    #[test]
    fn complete_draft_passes() {
        assert_eq!(check_draft(&filled_default()), Ok(()));
    }

    #[test]
    fn empty_default_reports_the_first_field() {
        assert_eq!(
            check_draft(&TraderDraft::default()),
            Err(ConstraintViolation::Missing(FieldKey::Id))
        );
    }

    /// Every credential set, so any selector combination passes.
    fn filled_everywhere() -> TraderDraft {
        let mut draft = filled_default();
        draft.ai_keys.qwen_key = "sk-q".into();
        draft.ai_keys.custom_api_url = "https://llm.example.com/v1".into();
        draft.ai_keys.custom_api_key = "sk-c".into();
        draft.ai_keys.custom_model_name = "gpt-4".into();
        draft.exchange_keys.binance_api_key = "bn-key".into();
        draft.exchange_keys.binance_secret_key = "bn-secret".into();
        draft
    }

    #[test]
    fn each_required_active_field_blocks_when_empty() {
        for ai_model in AiModel::iter() {
            for exchange in Exchange::iter() {
                let mut draft = filled_everywhere();
                draft.ai_model = ai_model;
                draft.exchange = exchange;
                assert_eq!(check_draft(&draft), Ok(()), "{ai_model}/{exchange}");

                let text_fields = visible_fields(ai_model, exchange)
                    .into_iter()
                    .filter(|spec| {
                        matches!(spec.kind, InputKind::Text | InputKind::Password | InputKind::Url)
                    });
                for spec in text_fields {
                    let cleared = draft.with_field(spec.key, "".into()).unwrap();
                    assert_eq!(
                        check_draft(&cleared),
                        Err(ConstraintViolation::Missing(spec.key)),
                        "{} for {ai_model}/{exchange}",
                        spec.key
                    );
                }
            }
        }
    }

    #[test]
    fn hidden_fields_are_not_checked() {
        let mut draft = filled_default();
        draft.ai_keys.deepseek_key.clear();
        draft.ai_model = AiModel::Qwen;
        draft.ai_keys.qwen_key = "sk-q".into();
        assert_eq!(check_draft(&draft), Ok(()));

        draft.exchange = Exchange::Binance;
        assert_eq!(
            check_draft(&draft),
            Err(ConstraintViolation::Missing(FieldKey::BinanceApiKey))
        );
    }

    #[test]
    fn custom_url_must_be_absolute() {
        let mut draft = filled_default();
        draft.ai_model = AiModel::Custom;
        draft.ai_keys.custom_api_url = "api.example.com/v1".into();
        draft.ai_keys.custom_api_key = "sk-c".into();
        draft.ai_keys.custom_model_name = "gpt-4".into();
        assert_eq!(
            check_draft(&draft),
            Err(ConstraintViolation::InvalidUrl(FieldKey::CustomApiUrl))
        );

        draft.ai_keys.custom_api_url = "https://api.example.com/v1".into();
        assert_eq!(check_draft(&draft), Ok(()));
    }

    #[test]
    fn testnet_checkbox_never_blocks() {
        let draft = filled_default()
            .with_field(FieldKey::HyperliquidTestnet, false.into())
            .unwrap();
        assert_eq!(check_draft(&draft), Ok(()));
    }

    #[test]
    fn numeric_bounds_on_the_draft() {
        let negative = filled_default()
            .with_field(FieldKey::InitialBalance, FieldValue::Decimal(Decimal::new(-1, 0)))
            .unwrap();
        assert_eq!(
            check_draft(&negative),
            Err(ConstraintViolation::BelowMin { key: FieldKey::InitialBalance, min: Decimal::ZERO })
        );

        let zero_interval = filled_default()
            .with_field(FieldKey::ScanIntervalMinutes, FieldValue::Integer(0))
            .unwrap();
        assert_eq!(
            check_draft(&zero_interval),
            Err(ConstraintViolation::BelowMin {
                key: FieldKey::ScanIntervalMinutes,
                min: Decimal::ONE,
            })
        );
    }

    #[test]
    fn parse_number_follows_min_and_step() {
        let balance = field_spec(FieldKey::InitialBalance).unwrap();
        let interval = field_spec(FieldKey::ScanIntervalMinutes).unwrap();

        assert_eq!(
            parse_number(&balance, "125.50"),
            Ok(FieldValue::Decimal(Decimal::new(1255, 1)))
        );
        assert_eq!(parse_number(&balance, "0"), Ok(FieldValue::Decimal(Decimal::ZERO)));
        assert!(matches!(
            parse_number(&balance, "1.005"),
            Err(ConstraintViolation::StepMismatch { .. })
        ));
        assert_eq!(
            parse_number(&balance, "abc"),
            Err(ConstraintViolation::NotANumber(FieldKey::InitialBalance))
        );
        assert_eq!(
            parse_number(&balance, ""),
            Err(ConstraintViolation::Missing(FieldKey::InitialBalance))
        );

        assert_eq!(parse_number(&interval, "15"), Ok(FieldValue::Integer(15)));
        assert!(matches!(parse_number(&interval, "0"), Err(ConstraintViolation::BelowMin { .. })));
        assert!(matches!(
            parse_number(&interval, "2.5"),
            Err(ConstraintViolation::StepMismatch { .. })
        ));
    }

    #[test]
    fn parse_number_accepts_exponent_notation() {
        let balance = field_spec(FieldKey::InitialBalance).unwrap();
        let interval = field_spec(FieldKey::ScanIntervalMinutes).unwrap();

        assert_eq!(
            parse_number(&balance, "1e3"),
            Ok(FieldValue::Decimal(Decimal::new(1000, 0)))
        );
        assert_eq!(
            parse_number(&balance, "2.5e2"),
            Ok(FieldValue::Decimal(Decimal::new(250, 0)))
        );
        assert_eq!(parse_number(&interval, "1e1"), Ok(FieldValue::Integer(10)));
    }

    #[test]
    fn oversized_interval_is_out_of_range() {
        let interval = field_spec(FieldKey::ScanIntervalMinutes).unwrap();
        assert_eq!(
            parse_number(&interval, "5000000000"),
            Err(ConstraintViolation::OutOfRange(FieldKey::ScanIntervalMinutes))
        );
        assert_eq!(parse_number(&interval, "4294967295"), Ok(FieldValue::Integer(u32::MAX)));
    }
}
