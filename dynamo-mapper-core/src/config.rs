/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Mapper configuration.

/// How an attribute whose variant doesn't match the field's tag is treated on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum VariantPolicy {
    /// The attribute is treated exactly like a missing key: a non-nullable field fails with
    /// a nullable violation and a nullable field keeps its default.
    #[default]
    Lenient,
    /// The attribute fails the mapping with
    /// [`MappingErrorKind::UnexpectedVariant`](crate::MappingErrorKind::UnexpectedVariant),
    /// whatever the field's nullability.
    Strict,
}

/// Configuration for a [`Mapper`](crate::Mapper).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapperConfig {
    variant_policy: VariantPolicy,
}

impl MapperConfig {
    /// Returns a builder for `MapperConfig`.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The policy applied to wrong-variant attributes.
    pub fn variant_policy(&self) -> VariantPolicy {
        self.variant_policy
    }
}

/// Builder for [`MapperConfig`].
#[derive(Debug, Clone, Default)]
pub struct Builder {
    variant_policy: Option<VariantPolicy>,
}

impl Builder {
    /// Sets the policy applied to wrong-variant attributes. Defaults to
    /// [`VariantPolicy::Lenient`].
    pub fn variant_policy(mut self, variant_policy: VariantPolicy) -> Self {
        self.variant_policy = Some(variant_policy);
        self
    }

    /// Sets the policy applied to wrong-variant attributes.
    pub fn set_variant_policy(&mut self, variant_policy: Option<VariantPolicy>) -> &mut Self {
        self.variant_policy = variant_policy;
        self
    }

    /// Builds the config.
    pub fn build(self) -> MapperConfig {
        MapperConfig {
            variant_policy: self.variant_policy.unwrap_or_default(),
        }
    }
}

impl From<MapperConfig> for Builder {
    fn from(config: MapperConfig) -> Self {
        Builder {
            variant_policy: Some(config.variant_policy),
        }
    }
}
