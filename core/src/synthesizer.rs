//! Synthetic campaign generation.
//!
//! Two passes over the table:
//!   1. Sample every field independently and uniformly from its domain.
//!   2. Overwrite conversion_rate with slope * spend + N(0, noise_std),
//!      clamped into conversion_bounds.
//!
//! Every field draws from its own RNG stream (see `rng`), so the result
//! depends only on the master seed and the record count.

use crate::{
    config::CampaignConfig,
    error::{CampaignError, CampaignResult},
    rng::{FieldRng, FieldSlot, RngBank},
    types::{CampaignDataset, CampaignRecord, CampaignType},
};

pub fn synthesize(config: &CampaignConfig) -> CampaignResult<CampaignDataset> {
    let n = config.record_count;
    if n == 0 {
        return Err(CampaignError::EmptyDataset);
    }

    let bank = RngBank::new(config.seed);
    let mut records = sample_uniform(config, &bank);

    let mut noise = bank.for_field(FieldSlot::Noise);
    for record in records.iter_mut() {
        record.conversion_rate = correlated_conversion(config, record.marketing_spend, &mut noise);
    }

    log::info!(
        "synthesizer: generated {n} campaigns (seed={})",
        config.seed
    );
    Ok(CampaignDataset::new(records))
}

fn sample_uniform(config: &CampaignConfig, bank: &RngBank) -> Vec<CampaignRecord> {
    let n = config.record_count;
    let mut spend = bank.for_field(FieldSlot::Spend);
    let mut conversion = bank.for_field(FieldSlot::InitialConversion);
    let mut kind = bank.for_field(FieldSlot::CampaignType);
    let mut duration = bank.for_field(FieldSlot::Duration);

    let (spend_lo, spend_hi) = config.spend_range;
    let (conv_lo, conv_hi) = config.initial_conversion_range;
    let (dur_lo, dur_hi) = config.duration_range;

    (0..n)
        .map(|_| CampaignRecord {
            marketing_spend: spend.uniform(spend_lo, spend_hi),
            conversion_rate: conversion.uniform(conv_lo, conv_hi),
            campaign_type: *kind.pick(&CampaignType::ALL),
            duration_days: duration.uniform_inclusive(dur_lo, dur_hi),
        })
        .collect()
}

fn correlated_conversion(config: &CampaignConfig, spend: f64, noise: &mut FieldRng) -> f64 {
    let (lo, hi) = config.conversion_bounds;
    let base = spend * config.conversion_slope + noise.normal(0.0, config.noise_std);
    base.clamp(lo, hi)
}
