pub mod contract;
pub mod prompt;

pub use contract::{
    ContractCategory, ContractRequest, ContractTerms, ContractType, RolePair, roles_for,
};
pub use prompt::{DISCLAIMER, build_prompt};
