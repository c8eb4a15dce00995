use super::common::*;
use crate::workflows::allocation::{
    AllocationCalculator, AllocationError, AllocationInput, ChannelSplit, DayOfWeek,
    EstimateClamp, OperatingMode, PacingConstants,
};

#[test]
fn efficiency_monday_targets_and_split() {
    let result = compute(&monday_input());

    assert_eq!(result.ratio_primary, 0.915);
    assert_eq!(result.day_weight, 1.1);
    assert_eq!(result.target_18, 1456);
    assert_eq!(result.hourly_gap, 58);
    assert_eq!(result.target_17, 1398);
    assert_eq!(result.total_resource_18, 2539);
    assert_eq!(result.total_resource_17, 2398);
    assert_eq!(result.per_person_17, 3.9);
    assert_eq!(result.per_person_18, 4.1);
    assert_eq!(
        result.split_18,
        ChannelSplit {
            primary: 1332,
            secondary: 124
        }
    );
    assert_eq!(
        result.split_17,
        ChannelSplit {
            primary: 1279,
            secondary: 119
        }
    );
}

#[test]
fn ratios_always_sum_to_one() {
    for mode in OperatingMode::ordered() {
        let input = AllocationInput {
            operating_mode: mode,
            ..monday_input()
        };
        let result = compute(&input);
        assert_eq!(result.ratio_primary + result.ratio_secondary, 1.0, "{mode:?}");
    }
}

#[test]
fn seventeen_hundred_target_derives_from_eighteen_hundred() {
    for (advertiser, partner, buffer) in [(2539, 1083, 0), (3530, 1443, 30), (5000, 120, -40)] {
        let input = AllocationInput {
            advertiser_target_total: advertiser,
            partner_estimate_18: partner,
            buffer_target: buffer,
            ..monday_input()
        };
        let result = compute(&input);
        let expected_gap = (result.target_18 as f64 * 0.04).round_ties_even() as i64;
        assert_eq!(result.target_18, advertiser - partner + buffer);
        assert_eq!(result.target_17, result.target_18 - expected_gap);
    }
}

#[test]
fn buffer_adds_to_in_house_target_without_sign_checks() {
    let input = AllocationInput {
        advertiser_target_total: 3530,
        partner_estimate_18: 1443,
        buffer_target: 30,
        ..monday_input()
    };
    assert_eq!(compute(&input).target_18, 2117);

    let negative = AllocationInput {
        advertiser_target_total: 500,
        partner_estimate_18: 1083,
        ..monday_input()
    };
    assert_eq!(compute(&negative).target_18, -583);
}

#[test]
fn fixed_slot_monday_pacing_projects_858_more_units() {
    let input = AllocationInput {
        advertiser_target_total: 4000,
        partner_estimate_18: 1400,
        current_total: 1799,
        fixed_slot_active: true,
        fixed_slot_description: "Morning fixed banner running until 15:00,".to_string(),
        ..monday_input()
    };
    let result = compute(&input);

    assert!((result.hourly_pace - 214.5).abs() < 1e-9);
    assert_eq!(result.projected_increase, 858);
    assert_eq!(result.estimate_18, 2657);
    assert_eq!(result.estimate_clamp, EstimateClamp::None);
    assert_eq!(
        result.messages.fixed_slot,
        "Morning fixed banner running until 15:00,"
    );
}

#[test]
fn weekday_weights_scale_base_pace() {
    let expected = [
        (DayOfWeek::Monday, 616),
        (DayOfWeek::Tuesday, 560),
        (DayOfWeek::Wednesday, 560),
        (DayOfWeek::Thursday, 532),
        (DayOfWeek::Friday, 476),
        (DayOfWeek::Unrecognized, 560),
    ];
    for (day, increase) in expected {
        let input = AllocationInput {
            day_of_week: day,
            ..monday_input()
        };
        assert_eq!(compute(&input).projected_increase, increase, "{day:?}");
    }
}

#[test]
fn estimate_far_above_target_snaps_to_fifty_over() {
    let result = compute(&monday_input());

    assert_eq!(result.estimate_clamp, EstimateClamp::SnappedHigh);
    assert_eq!(result.estimate_18, result.target_18 + 50);
    assert_eq!(result.estimate_24, 2033);
    assert_eq!(result.estimate_per_person, 4.2);
    assert_eq!(
        result.estimate_split,
        ChannelSplit {
            primary: 1378,
            secondary: 128
        }
    );
}

#[test]
fn estimate_far_below_target_snaps_to_fifty_under() {
    let input = AllocationInput {
        day_of_week: DayOfWeek::Friday,
        current_total: 0,
        ..monday_input()
    };
    let result = compute(&input);

    assert_eq!(result.estimate_clamp, EstimateClamp::SnappedLow);
    assert_eq!(result.estimate_18, result.target_18 - 50);
}

#[test]
fn estimates_on_band_edges_are_kept() {
    let upper = AllocationInput {
        current_total: 990,
        ..monday_input()
    };
    let result = compute(&upper);
    assert_eq!(result.estimate_clamp, EstimateClamp::None);
    assert_eq!(result.estimate_18, result.target_18 + 150);

    let lower = AllocationInput {
        current_total: 640,
        ..monday_input()
    };
    let result = compute(&lower);
    assert_eq!(result.estimate_clamp, EstimateClamp::None);
    assert_eq!(result.estimate_18, result.target_18 - 200);
}

#[test]
fn in_band_estimate_is_current_plus_projection() {
    let input = AllocationInput {
        current_total: 900,
        ..monday_input()
    };
    let result = compute(&input);
    assert_eq!(result.estimate_18, 900 + result.projected_increase);
    assert_eq!(result.estimate_18, 1516);
}

#[test]
fn on_track_message_at_ninety_nine_percent() {
    let result = compute(&thousand_target_input(374));
    assert_eq!(result.estimate_18, 990);
    assert_eq!(result.achieve_rate, 0.99);
    assert!(result.messages.status.contains("On track"));
    assert!(result.messages.action.contains("banner"));
    assert_eq!(result.shortfall(), 0);
}

#[test]
fn shortfall_message_names_the_gap() {
    let result = compute(&thousand_target_input(373));
    assert_eq!(result.estimate_18, 989);
    assert!(result
        .messages
        .status
        .contains("fall short of the in-house target by about 11 units"));
    assert!(result.messages.action.contains("product resources"));
    assert_eq!(result.shortfall(), 11);
}

#[test]
fn inactive_fixed_slot_uses_generic_line() {
    let result = compute(&monday_input());
    assert!(result.messages.fixed_slot.starts_with("No special items today"));
    assert!(result.messages.fixed_slot_action.is_empty());
}

#[test]
fn cpa_figures_are_in_ten_thousands() {
    let result = compute(&monday_input());
    assert_eq!(result.cpa.total, 1.2);
    assert_eq!(result.cpa.primary, 1.1);
    assert_eq!(result.cpa.secondary, 2.3);
}

#[test]
fn cpa_with_zero_volume_is_zero_not_an_error() {
    let input = AllocationInput {
        current_total: 0,
        current_primary_channel: 0,
        current_secondary_channel: 0,
        ..monday_input()
    };
    let result = compute(&input);
    assert_eq!(result.cpa.total, 0.0);
    assert_eq!(result.cpa.primary, 0.0);
    assert_eq!(result.cpa.secondary, 0.0);
}

#[test]
fn per_person_and_cpa_values_keep_one_decimal() {
    for current_total in [0, 373, 777, 1200, 1799] {
        let input = AllocationInput {
            current_total,
            current_primary_channel: current_total * 9 / 10,
            current_secondary_channel: current_total / 10,
            cost_total: 13_333_337,
            ..monday_input()
        };
        let result = compute(&input);
        for value in [
            result.per_person_17,
            result.per_person_18,
            result.estimate_per_person,
            result.cpa.total,
            result.cpa.primary,
            result.cpa.secondary,
        ] {
            assert!(decimals(value) <= 1, "{value} has more than one decimal");
        }
    }
}

#[test]
fn zero_member_count_is_a_precondition_violation() {
    let input = AllocationInput {
        active_member_count: 0,
        ..monday_input()
    };
    assert_eq!(
        AllocationCalculator::default().compute(&input),
        Err(AllocationError::ZeroMemberCount)
    );
}

#[test]
fn zero_target_is_a_precondition_violation() {
    let input = AllocationInput {
        advertiser_target_total: 1083,
        partner_estimate_18: 1083,
        ..monday_input()
    };
    assert_eq!(
        AllocationCalculator::default().compute(&input),
        Err(AllocationError::ZeroCheckpointTarget)
    );
}

#[test]
fn zero_combined_resource_blocks_next_day_plan() {
    let input = AllocationInput {
        advertiser_target_total: 0,
        partner_estimate_18: 500,
        ..monday_input()
    };
    assert_eq!(
        AllocationCalculator::default().compute(&input),
        Err(AllocationError::ZeroCheckpointResource {
            target_18: -500,
            partner_estimate_18: 500
        })
    );
}

#[test]
fn next_day_uses_higher_rate_when_pace_reaches_threshold() {
    let result = compute(&thousand_target_input(364));
    assert_eq!(result.estimate_18, 980);
    assert_eq!(result.next_day.per_person, 4.8);
    assert_eq!(result.next_day.total_target, 1728);

    let result = compute(&thousand_target_input(363));
    assert_eq!(result.next_day.per_person, 4.4);
    assert_eq!(result.next_day.total_target, 1584);
}

#[test]
fn next_day_plan_subtracts_partner_morning_and_splits() {
    let plan = compute(&monday_input()).next_day;
    assert_eq!(plan.member_count, 360);
    assert_eq!(plan.per_person, 4.4);
    assert_eq!(plan.total_target, 1584);
    assert_eq!(plan.primary_target, 1084);
    assert_eq!(
        plan.split,
        ChannelSplit {
            primary: 992,
            secondary: 92
        }
    );
}

#[test]
fn custom_constants_change_the_projection() {
    let calculator = AllocationCalculator::new(PacingConstants {
        remaining_hours: 2.0,
        ..PacingConstants::default()
    });
    let input = AllocationInput {
        current_total: 1000,
        ..monday_input()
    };
    let result = calculator.compute(&input).expect("allocation computes");
    assert_eq!(result.projected_increase, 308);
    assert_eq!(result.estimate_18, 1308);
    assert_eq!(calculator.constants().remaining_hours, 2.0);
}

#[test]
fn counters_near_the_integer_limit_are_rejected_not_wrapped() {
    let calculator = AllocationCalculator::default();

    let huge_current = AllocationInput {
        current_total: i64::MAX,
        ..monday_input()
    };
    assert_eq!(
        calculator.compute(&huge_current),
        Err(AllocationError::ArithmeticOverflow {
            figure: "estimate_18"
        })
    );

    let huge_target = AllocationInput {
        advertiser_target_total: i64::MAX,
        partner_estimate_18: 0,
        buffer_target: 1,
        ..monday_input()
    };
    assert_eq!(
        calculator.compute(&huge_target),
        Err(AllocationError::ArithmeticOverflow {
            figure: "target_18"
        })
    );

    let huge_partner = AllocationInput {
        advertiser_target_total: i64::MIN,
        partner_estimate_18: 1,
        ..monday_input()
    };
    assert!(matches!(
        calculator.compute(&huge_partner),
        Err(AllocationError::ArithmeticOverflow { .. })
    ));
}

#[test]
fn negative_partner_morning_overflow_is_rejected() {
    let input = AllocationInput {
        tomorrow_partner_estimate_morning: i64::MIN,
        ..monday_input()
    };
    assert_eq!(
        AllocationCalculator::default().compute(&input),
        Err(AllocationError::ArithmeticOverflow {
            figure: "next-day primary target"
        })
    );
}

#[test]
fn compute_is_deterministic() {
    let input = monday_input();
    assert_eq!(compute(&input), compute(&input));
}
