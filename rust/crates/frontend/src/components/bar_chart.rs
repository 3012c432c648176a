//! Horizontal stacked bar chart.

use yew::prelude::*;

/// One bar: a label split into passed/failed counts.
#[derive(Clone, PartialEq)]
pub struct BarDatum {
    pub label: &'static str,
    pub passed: u32,
    pub failed: u32,
}

impl BarDatum {
    /// Passed share in percent (0 when there is no data).
    pub fn pass_percent(&self) -> f64 {
        let total = self.passed + self.failed;
        if total == 0 {
            return 0.0;
        }
        f64::from(self.passed) / f64::from(total) * 100.0
    }
}

/// Properties for BarChart component.
#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub data: Vec<BarDatum>,
}

/// Stacked passed/failed bars, one per label.
#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    html! {
        <div style="display: flex; flex-direction: column; gap: 1rem;">
            { for props.data.iter().map(|bar| {
                let passed = bar.pass_percent();
                html! {
                    <div>
                        <div style="display: flex; justify-content: space-between; margin-bottom: 0.25rem;">
                            <span>{ bar.label }</span>
                            <span style="color: var(--text-secondary);">
                                { format!("{} passed / {} failed", bar.passed, bar.failed) }
                            </span>
                        </div>
                        <div class="progress-bar stacked">
                            <div class="progress-bar-fill passed" style={format!("width: {passed}%")} />
                            <div class="progress-bar-fill failed" style={format!("width: {}%", 100.0 - passed)} />
                        </div>
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_percent() {
        let bar = BarDatum {
            label: "CSE",
            passed: 90,
            failed: 10,
        };
        assert!((bar.pass_percent() - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pass_percent_without_data() {
        let bar = BarDatum {
            label: "NEW",
            passed: 0,
            failed: 0,
        };
        assert!(bar.pass_percent().abs() < f64::EPSILON);
    }
}
