// Form module structure: draft values, field access, visibility and input checks

pub mod constraints;
pub mod draft;
pub mod field;
pub mod state;
pub mod visibility;

pub use constraints::{check_draft, parse_number};
pub use draft::{
    AiCredentials, AiKeys, AiModel, Exchange, ExchangeCredentials, ExchangeKeys, TraderDraft,
    DEFAULT_DRAFT,
};
pub use field::{FieldKey, FieldValue};
pub use state::FormState;
pub use visibility::{field_spec, visible_fields, FieldSpec, InputKind, Label, Section};
