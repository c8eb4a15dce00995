use pacing_desk::workflows::allocation::{
    AllocationCalculator, AllocationError, AllocationInput, DayOfWeek, OperatingMode,
};

fn calculator() -> AllocationCalculator {
    AllocationCalculator::default()
}

fn efficiency_monday() -> AllocationInput {
    AllocationInput {
        day_of_week: DayOfWeek::Monday,
        operating_mode: OperatingMode::Efficiency,
        active_member_count: 359,
        advertiser_target_total: 2539,
        partner_estimate_17: 1000,
        partner_estimate_18: 1083,
        buffer_target: 0,
        current_total: 1200,
        current_primary_channel: 1100,
        current_secondary_channel: 100,
        cost_total: 14_400_000,
        cost_primary_channel: 12_100_000,
        cost_secondary_channel: 2_300_000,
        tomorrow_member_count: 360,
        tomorrow_partner_estimate_morning: 500,
        ..AllocationInput::default()
    }
}

#[test]
fn efficiency_mode_target_and_primary_split() {
    let result = calculator()
        .compute(&efficiency_monday())
        .expect("allocation computes");

    assert_eq!(result.target_18, 1456);
    assert_eq!(result.ratio_primary, 0.915);
    assert_eq!(result.split_18.primary, 1332);
}

#[test]
fn fixed_slot_monday_estimate() {
    let input = AllocationInput {
        advertiser_target_total: 4000,
        partner_estimate_18: 1400,
        current_total: 1799,
        fixed_slot_active: true,
        ..efficiency_monday()
    };
    let result = calculator().compute(&input).expect("allocation computes");

    assert!((result.hourly_pace - 214.5).abs() < 1e-9);
    assert_eq!(result.projected_increase, 858);
    assert_eq!(result.estimate_18, 2657);
}

#[test]
fn zero_headcount_is_rejected_instead_of_dividing() {
    let input = AllocationInput {
        active_member_count: 0,
        ..efficiency_monday()
    };
    let err = calculator()
        .compute(&input)
        .expect_err("zero headcount rejected");

    assert_eq!(err, AllocationError::ZeroMemberCount);
    assert!(err.to_string().contains("member count"));
}

#[test]
fn zero_current_total_substitutes_zero_cpa() {
    let input = AllocationInput {
        current_total: 0,
        ..efficiency_monday()
    };
    let result = calculator().compute(&input).expect("allocation computes");

    assert_eq!(result.cpa.total, 0.0);
    assert_eq!(result.cpa.primary, 1.1);
}

#[test]
fn result_serializes_with_named_fields() {
    let result = calculator()
        .compute(&efficiency_monday())
        .expect("allocation computes");
    let value = serde_json::to_value(&result).expect("result serializes");

    assert_eq!(value["target_18"], 1456);
    assert_eq!(value["split_18"]["primary"], 1332);
    assert_eq!(value["estimate_clamp"], "snapped_high");
    assert_eq!(value["next_day"]["total_target"], 1584);
    assert!(value["messages"]["status"].is_string());
}

#[test]
fn lenient_labels_fall_back_to_neutral_values() {
    let input: AllocationInput = serde_json::from_value(serde_json::json!({
        "day_of_week": "Saturday",
        "operating_mode": "something new",
        "active_member_count": 10,
        "advertiser_target_total": 100
    }))
    .expect("input deserializes");

    assert_eq!(input.day_of_week, DayOfWeek::Unrecognized);
    assert_eq!(input.operating_mode, OperatingMode::Normal);
    assert_eq!(input.day_of_week.pacing_weight(), 1.0);
    assert_eq!(input.partner_estimate_18, 0);
}
