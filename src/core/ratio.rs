//! アスペクト比の判定
//!
//! 目標比率と許容誤差（パーセント）から許容範囲を求め、
//! 画像の幅 / 高さがその範囲に収まるかを判定する。

use super::error::{AuditError, AuditResult};
use super::types::ImageDescriptor;

/// デフォルトの目標比率（16:9）
pub const DEFAULT_TARGET_RATIO: f64 = 16.0 / 9.0;

/// デフォルトの許容誤差（パーセント）
pub const DEFAULT_TOLERANCE_PERCENT: f64 = 2.0;

/// 境界値比較に使う絶対誤差
const BOUNDARY_EPSILON: f64 = 1e-9;

/// 許容範囲 `[min, max]` を計算
pub fn acceptable_bounds(target_ratio: f64, tolerance_percent: f64) -> (f64, f64) {
    let tolerance_factor = tolerance_percent / 100.0;
    (
        target_ratio * (1.0 - tolerance_factor),
        target_ratio * (1.0 + tolerance_factor),
    )
}

/// 幅と高さが目標比率の許容範囲内かどうか
///
/// 境界値は準拠として扱う。`width`, `height` は呼び出し側で 0 より大きいことを保証すること。
pub fn is_conforming(width: u32, height: u32, target_ratio: f64, tolerance_percent: f64) -> bool {
    debug_assert!(width > 0 && height > 0);

    let actual_ratio = f64::from(width) / f64::from(height);
    let (min_acceptable, max_acceptable) = acceptable_bounds(target_ratio, tolerance_percent);

    actual_ratio >= min_acceptable - BOUNDARY_EPSILON
        && actual_ratio <= max_acceptable + BOUNDARY_EPSILON
}

/// 判定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Conforming,
    NonConforming,
}

/// 目標比率と許容誤差の組
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioPolicy {
    target_ratio: f64,
    tolerance_percent: f64,
}

impl Default for RatioPolicy {
    fn default() -> Self {
        Self {
            target_ratio: DEFAULT_TARGET_RATIO,
            tolerance_percent: DEFAULT_TOLERANCE_PERCENT,
        }
    }
}

impl RatioPolicy {
    /// 検証済みのポリシーを作成
    pub fn new(target_ratio: f64, tolerance_percent: f64) -> AuditResult<Self> {
        let policy = Self {
            target_ratio,
            tolerance_percent,
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn target_ratio(&self) -> f64 {
        self.target_ratio
    }

    pub fn tolerance_percent(&self) -> f64 {
        self.tolerance_percent
    }

    pub fn bounds(&self) -> (f64, f64) {
        acceptable_bounds(self.target_ratio, self.tolerance_percent)
    }

    pub fn is_conforming(&self, width: u32, height: u32) -> bool {
        is_conforming(width, height, self.target_ratio, self.tolerance_percent)
    }

    pub fn classify(&self, descriptor: &ImageDescriptor) -> Classification {
        if self.is_conforming(descriptor.width, descriptor.height) {
            Classification::Conforming
        } else {
            Classification::NonConforming
        }
    }

    pub fn validate(&self) -> AuditResult<()> {
        if !self.target_ratio.is_finite() || self.target_ratio <= 0.0 {
            return Err(AuditError::configuration(format!(
                "目標比率は正の数である必要があります: {}",
                self.target_ratio
            )));
        }

        if !self.tolerance_percent.is_finite() || self.tolerance_percent < 0.0 {
            return Err(AuditError::configuration(format!(
                "許容誤差は0以上である必要があります: {}",
                self.tolerance_percent
            )));
        }

        Ok(())
    }
}

/// 比率文字列を解析（`16:9`, `16/9`, `1.7778` 形式）
pub fn parse_ratio(text: &str) -> AuditResult<f64> {
    let text = text.trim();
    let invalid = || AuditError::configuration(format!("比率を解析できません: {text:?}"));

    let ratio = match text.split_once([':', '/']) {
        Some((width, height)) => {
            let width: f64 = width.trim().parse().map_err(|_| invalid())?;
            let height: f64 = height.trim().parse().map_err(|_| invalid())?;
            if width <= 0.0 || height <= 0.0 {
                return Err(invalid());
            }
            width / height
        }
        None => text.parse().map_err(|_| invalid())?,
    };

    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(invalid());
    }

    Ok(ratio)
}
