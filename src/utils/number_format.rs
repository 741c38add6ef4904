/// Label format chosen for a tick grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFormat {
    Fixed(usize), // 12, 0.25
    Scientific,   // +1.0e+05
}

impl TickFormat {
    /// Picks the label format for a grid of magnitude `10^power`.
    pub fn for_power(power: f64, scientific: bool) -> Self {
        if scientific && (power > 4.0 || power < -4.0) {
            TickFormat::Scientific
        } else if power >= 0.0 {
            TickFormat::Fixed(0)
        } else {
            TickFormat::Fixed((-power) as usize)
        }
    }

    pub fn format(&self, value: f64) -> String {
        match *self {
            TickFormat::Fixed(decimals) => format!("{:.*}", decimals, value),
            TickFormat::Scientific => format_scientific(value, 1),
        }
    }
}

/// Formats `value` as a signed mantissa and a signed, two-digit exponent: `+1.0e+05`.
pub fn format_scientific(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let raw = format!("{:+.*e}", precision, value);
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.abs())
        }
        None => raw,
    }
}
