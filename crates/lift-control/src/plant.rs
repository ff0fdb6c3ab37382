//! 被控对象模型 - 固定物理参数
//!
//! 电梯车厢的离散时间一阶模型。每一步：
//!
//! ```text
//! position ← position * decay * sign(error) + power * gain
//! ```
//!
//! `decay` 是每步阻尼系数，`gain` 是功率到位移的增益。两者是部署
//! 期标定的物理参数，不随请求变化。放进显式结构体（而不是散落
//! 在控制流里的字面量）是为了让数值本身可以被单独断言和测试。

/// 被控对象参数
///
/// [`Default`] 给出标定值；构造自定义实例只用于测试和仿真实验。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantModel {
    /// 每步阻尼系数
    pub decay: f64,
    /// 功率→位移增益
    pub gain: f64,
    /// 启动斜坡子步数
    pub ramp_steps: u32,
    /// 斜坡子步时长（斜坡时间轴 t = i * ramp_dt）
    pub ramp_dt: f64,
    /// 斜坡末端的功率命令上限
    pub ramp_power_ceiling: f64,
    /// 闭环整定阶段的起始步号
    pub settle_start: u32,
    /// 闭环整定阶段的步数（固定时域，无收敛提前退出）
    pub settle_steps: u32,
}

impl Default for PlantModel {
    fn default() -> Self {
        PlantModel {
            decay: 0.996,
            gain: 0.00951,
            ramp_steps: 30,
            ramp_dt: 0.1,
            ramp_power_ceiling: 0.315,
            settle_start: 3,
            settle_steps: 397,
        }
    }
}

impl PlantModel {
    /// 斜坡总时长 = 子步数 × 子步时长
    #[must_use]
    pub fn ramp_duration(&self) -> f64 {
        self.ramp_steps as f64 * self.ramp_dt
    }

    /// 斜坡阶段 t 时刻的功率命令：从近零线性爬升到上限
    #[inline]
    #[must_use]
    pub fn ramp_power(&self, t: f64) -> f64 {
        t * self.ramp_power_ceiling / self.ramp_duration()
    }

    /// 单步衰减-驱动更新（不含绝对值处理，由调用方按阶段决定）
    #[inline]
    #[must_use]
    pub fn drive(&self, position: f64, sign: f64, power: f64) -> f64 {
        position * self.decay * sign + power * self.gain
    }

    /// 整定阶段结束步号（不含）
    #[must_use]
    pub fn settle_end(&self) -> u32 {
        self.settle_start + self.settle_steps
    }
}
