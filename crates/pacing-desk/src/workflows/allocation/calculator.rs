use super::constants::PacingConstants;
use super::domain::{AllocationError, AllocationInput};
use super::messages;
use super::result::{AllocationResult, ChannelSplit, CpaFigures, EstimateClamp, NextDayPlan};
use super::rounding::{add_counts, checked_round_count, per_head, round_tenth, sub_counts};
use tracing::{debug, warn};

/// Stateless calculator that applies the pacing constants to one input
/// record.
#[derive(Debug, Clone, Default)]
pub struct AllocationCalculator {
    constants: PacingConstants,
}

impl AllocationCalculator {
    pub fn new(constants: PacingConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &PacingConstants {
        &self.constants
    }

    pub fn compute(&self, input: &AllocationInput) -> Result<AllocationResult, AllocationError> {
        let members = input.active_member_count;
        if members == 0 {
            return Err(AllocationError::ZeroMemberCount);
        }
        let c = &self.constants;

        let ratio_primary = input.operating_mode.primary_ratio();
        let ratio_secondary = 1.0 - ratio_primary;
        let day_weight = input.day_of_week.pacing_weight();

        let target_18 = add_counts(
            "target_18",
            sub_counts(
                "target_18",
                input.advertiser_target_total,
                input.partner_estimate_18,
            )?,
            input.buffer_target,
        )?;
        // 17:00 is derived from 18:00 rather than from the 17:00 partner
        // estimate so the two checkpoints stay consistent.
        let hourly_gap =
            checked_round_count("hourly_gap", target_18 as f64 * c.hourly_gap_fraction)?;
        let target_17 = sub_counts("target_17", target_18, hourly_gap)?;

        let total_resource_18 =
            add_counts("total_resource_18", target_18, input.partner_estimate_18)?;
        let total_resource_17 =
            add_counts("total_resource_17", target_17, input.partner_estimate_17)?;

        let base_rate = if input.fixed_slot_active {
            c.fixed_slot_hourly_rate
        } else {
            c.base_hourly_rate
        };
        let hourly_pace = base_rate * day_weight;
        let projected_increase =
            checked_round_count("projected_increase", hourly_pace * c.remaining_hours)?;
        let raw_estimate = add_counts("estimate_18", input.current_total, projected_increase)?;
        let (estimate_18, estimate_clamp) = self.clamp_estimate(raw_estimate, target_18)?;
        if estimate_clamp != EstimateClamp::None {
            warn!(
                raw = raw_estimate,
                estimate_18,
                target_18,
                clamp = ?estimate_clamp,
                "18:00 estimate outside the expected band"
            );
        }
        let estimate_24 =
            checked_round_count("estimate_24", estimate_18 as f64 * c.end_of_day_multiplier)?;

        if target_18 == 0 {
            return Err(AllocationError::ZeroCheckpointTarget);
        }
        let achieve_rate = estimate_18 as f64 / target_18 as f64;
        let on_track = achieve_rate >= c.on_track_threshold;

        let next_day = self.plan_next_day(
            input,
            estimate_18,
            target_18,
            total_resource_18,
            ratio_primary,
            ratio_secondary,
        )?;

        let result = AllocationResult {
            ratio_primary,
            ratio_secondary,
            day_weight,
            target_17,
            target_18,
            hourly_gap,
            total_resource_17,
            total_resource_18,
            per_person_17: per_head(target_17, members),
            per_person_18: per_head(target_18, members),
            split_17: ChannelSplit::of(target_17, ratio_primary, ratio_secondary),
            split_18: ChannelSplit::of(target_18, ratio_primary, ratio_secondary),
            hourly_pace,
            projected_increase,
            estimate_18,
            estimate_clamp,
            estimate_24,
            estimate_per_person: per_head(estimate_18, members),
            estimate_split: ChannelSplit::of(estimate_18, ratio_primary, ratio_secondary),
            achieve_rate,
            cpa: CpaFigures {
                total: self.cpa(input.cost_total, input.current_total),
                primary: self.cpa(input.cost_primary_channel, input.current_primary_channel),
                secondary: self.cpa(
                    input.cost_secondary_channel,
                    input.current_secondary_channel,
                ),
            },
            messages: messages::build(
                on_track,
                target_18,
                estimate_18,
                input.fixed_slot_active,
                &input.fixed_slot_description,
            ),
            next_day,
        };

        debug!(
            mode = ?input.operating_mode,
            day = ?input.day_of_week,
            target_17,
            target_18,
            estimate_18,
            estimate_24,
            achieve_rate,
            "allocation computed"
        );

        Ok(result)
    }

    /// Out-of-band estimates snap to a fixed offset from the target, not to
    /// the band edge. The band is asymmetric.
    fn clamp_estimate(
        &self,
        raw: i64,
        target_18: i64,
    ) -> Result<(i64, EstimateClamp), AllocationError> {
        let c = &self.constants;
        let upper = add_counts("estimate band", target_18, c.clamp_upper_band)?;
        let lower = sub_counts("estimate band", target_18, c.clamp_lower_band)?;
        Ok(if raw > upper {
            (
                add_counts("estimate_18", target_18, c.clamp_snap_offset)?,
                EstimateClamp::SnappedHigh,
            )
        } else if raw < lower {
            (
                sub_counts("estimate_18", target_18, c.clamp_snap_offset)?,
                EstimateClamp::SnappedLow,
            )
        } else {
            (raw, EstimateClamp::None)
        })
    }

    /// Zero volume reports a CPA of zero instead of failing, unlike the
    /// per-person and achieve-rate paths.
    fn cpa(&self, cost: i64, volume: i64) -> f64 {
        if volume == 0 {
            return 0.0;
        }
        round_tenth(cost as f64 / volume as f64 / self.constants.cpa_unit_divisor)
    }

    fn plan_next_day(
        &self,
        input: &AllocationInput,
        estimate_18: i64,
        target_18: i64,
        total_resource_18: i64,
        ratio_primary: f64,
        ratio_secondary: f64,
    ) -> Result<NextDayPlan, AllocationError> {
        let c = &self.constants;
        if total_resource_18 == 0 {
            return Err(AllocationError::ZeroCheckpointResource {
                target_18,
                partner_estimate_18: input.partner_estimate_18,
            });
        }

        let pace_ratio = estimate_18 as f64 / total_resource_18 as f64;
        let per_person = if pace_ratio >= c.next_day_ratio_threshold {
            c.next_day_per_person_high
        } else {
            c.next_day_per_person_low
        };
        let total_target = checked_round_count(
            "next-day total target",
            f64::from(input.tomorrow_member_count) * per_person,
        )?;
        let primary_target = sub_counts(
            "next-day primary target",
            total_target,
            input.tomorrow_partner_estimate_morning,
        )?;

        Ok(NextDayPlan {
            per_person,
            member_count: input.tomorrow_member_count,
            total_target,
            partner_estimate_morning: input.tomorrow_partner_estimate_morning,
            primary_target,
            split: ChannelSplit::of(primary_target, ratio_primary, ratio_secondary),
        })
    }
}
