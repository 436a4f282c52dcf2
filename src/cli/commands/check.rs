use crate::core::{parse_ratio, AuditError, Classification, ImageDescriptor, RatioPolicy};
use anyhow::Result;

/// 1つのサイズを判定した結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckOutcome {
    pub actual_ratio: f64,
    pub min_acceptable: f64,
    pub max_acceptable: f64,
    pub classification: Classification,
}

/// 幅と高さを目標比率に照らして判定
pub fn check_dimensions(
    width: u32,
    height: u32,
    ratio: &str,
    tolerance_percent: f64,
) -> Result<CheckOutcome> {
    if width == 0 || height == 0 {
        return Err(AuditError::configuration(format!(
            "幅と高さは1以上である必要があります: {width}x{height}"
        ))
        .into());
    }

    let policy = RatioPolicy::new(parse_ratio(ratio)?, tolerance_percent)?;
    let descriptor = ImageDescriptor::new("", width, height);
    let (min_acceptable, max_acceptable) = policy.bounds();

    Ok(CheckOutcome {
        actual_ratio: descriptor.aspect_ratio(),
        min_acceptable,
        max_acceptable,
        classification: policy.classify(&descriptor),
    })
}

/// Execute the check command and print the verdict
pub fn execute_check(width: u32, height: u32, ratio: &str, tolerance_percent: f64) -> Result<()> {
    let outcome = check_dimensions(width, height, ratio, tolerance_percent)?;

    println!(
        "📐 {width}x{height}: 比率 {:.5} (許容範囲 {:.5} - {:.5})",
        outcome.actual_ratio, outcome.min_acceptable, outcome.max_acceptable
    );
    match outcome.classification {
        Classification::Conforming => println!("✅ 適合"),
        Classification::NonConforming => println!("❌ 不適合"),
    }

    Ok(())
}
