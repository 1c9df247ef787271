//! Composable descriptor validation
//!
//! Validators are independent post-construction policy checks. Callers pick
//! the checks they want through [`ArtifactDescriptorValidatorBuilder`]; the
//! resulting composite runs them in a fixed order and surfaces the first
//! violation. Validators never mutate the descriptor.

pub mod builder;
pub mod validators;

pub use builder::ArtifactDescriptorValidatorBuilder;
pub use validators::{
    MinRuntimeVersionValidator, ProductValidator, SupportedJavaVersionValidator,
    VersionFormatValidator,
};

use crate::artifact::ArtifactDescriptor;
use crate::error::Result;

/// A post-construction policy check on a descriptor
pub trait ArtifactDescriptorValidator: Send + Sync {
    /// Check the descriptor against this validator's policy
    ///
    /// # Errors
    ///
    /// Returns the policy-specific validation error on violation.
    fn validate(&self, descriptor: &ArtifactDescriptor) -> Result<()>;
}

/// Runs a fixed sequence of validators, stopping at the first violation
pub struct CompositeValidator {
    validators: Vec<Box<dyn ArtifactDescriptorValidator>>,
}

impl CompositeValidator {
    pub fn new(validators: Vec<Box<dyn ArtifactDescriptorValidator>>) -> Self {
        CompositeValidator { validators }
    }
}

impl ArtifactDescriptorValidator for CompositeValidator {
    fn validate(&self, descriptor: &ArtifactDescriptor) -> Result<()> {
        for validator in &self.validators {
            validator.validate(descriptor)?;
        }
        Ok(())
    }
}
