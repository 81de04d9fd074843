mod field_instruction;
mod static_fragment;

pub use field_instruction::{FieldInstructionFragment, MASK_EXAMPLES};
pub use static_fragment::StaticFragment;
