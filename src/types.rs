//! 顶点键与距离类型定义

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, Sub};

/// 顶点键
///
/// 任何可克隆、可判等、可哈希的值都可以作为顶点。
pub trait VertexKey: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> VertexKey for T {}

/// 边的距离（权重）
///
/// 必须有符号以容纳负权边。`infinity()` 是该类型能表示的最大值，
/// 作为 Bellman-Ford 中"不可达"的哨兵，参与运算前需先用 `is_finite` 判断。
pub trait Distance: Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Debug {
    /// 零距离
    fn zero() -> Self;

    /// 哨兵"无穷大"
    fn infinity() -> Self;

    /// 加法，溢出时返回 None
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// 减法，溢出时返回 None
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// 是否为有限距离
    fn is_finite(self) -> bool {
        self < Self::infinity()
    }
}

macro_rules! impl_distance_int {
    ($($t:ty),*) => {
        $(
            impl Distance for $t {
                fn zero() -> Self {
                    0
                }

                fn infinity() -> Self {
                    <$t>::MAX
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_distance_float {
    ($($t:ty),*) => {
        $(
            impl Distance for $t {
                fn zero() -> Self {
                    0.0
                }

                fn infinity() -> Self {
                    <$t>::MAX
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    let sum = self + rhs;
                    if sum.is_finite() {
                        Some(sum)
                    } else {
                        None
                    }
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    let diff = self - rhs;
                    if diff.is_finite() {
                        Some(diff)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

impl_distance_int!(i8, i16, i32, i64, i128, isize);
impl_distance_float!(f32, f64);
