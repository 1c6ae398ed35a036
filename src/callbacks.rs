//! Named input/output bindings between the filter widgets and the charts
//!
//! Each output chart is produced by one pure render function that declares
//! which inputs it watches. A shell reports which input changed and gets back
//! fresh specs for exactly the dependent outputs, so any UI that can observe
//! widget changes and redraw named areas can host the dashboard.

use serde::Serialize;
use std::fmt;

use crate::charts::{ChartSpec, render_pie, render_scatter};
use crate::data::{LaunchDataset, payload_outcome_rows, success_counts_by_site};
use crate::error::Result;
use crate::state::FilterSelection;

/// Filter widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputId {
    SiteDropdown,
    PayloadSlider,
}

impl InputId {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputId::SiteDropdown => "site-dropdown",
            InputId::PayloadSlider => "payload-slider",
        }
    }
}

/// Chart display areas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OutputId {
    #[serde(rename = "success-pie-chart")]
    SuccessPieChart,
    #[serde(rename = "success-payload-scatter-chart")]
    SuccessPayloadScatterChart,
}

impl OutputId {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputId::SuccessPieChart => "success-pie-chart",
            OutputId::SuccessPayloadScatterChart => "success-payload-scatter-chart",
        }
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pure `(dataset, selection) -> chart` function
pub type RenderFn = fn(&LaunchDataset, &FilterSelection) -> Result<ChartSpec>;

/// One output bound to the inputs it depends on
#[derive(Clone)]
pub struct Callback {
    pub output: OutputId,
    pub inputs: Vec<InputId>,
    pub render: RenderFn,
}

/// Success pie: depends on the site only
pub fn success_pie(dataset: &LaunchDataset, selection: &FilterSelection) -> Result<ChartSpec> {
    let counts = success_counts_by_site(dataset, selection)?;
    Ok(render_pie(&counts, selection.site()))
}

/// Payload scatter: depends on site and payload range
pub fn payload_scatter(dataset: &LaunchDataset, selection: &FilterSelection) -> Result<ChartSpec> {
    let rows = payload_outcome_rows(dataset, selection)?;
    Ok(render_scatter(&rows, selection.site()))
}

/// Registry of output bindings, in registration order
#[derive(Clone, Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dashboard's two bindings
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry
            .register(
                OutputId::SuccessPieChart,
                &[InputId::SiteDropdown],
                success_pie,
            )
            .register(
                OutputId::SuccessPayloadScatterChart,
                &[InputId::SiteDropdown, InputId::PayloadSlider],
                payload_scatter,
            );
        registry
    }

    /// Bind `output` to `render`; an existing binding for the same output is replaced
    pub fn register(&mut self, output: OutputId, inputs: &[InputId], render: RenderFn) -> &mut Self {
        let callback = Callback {
            output,
            inputs: inputs.to_vec(),
            render,
        };
        match self.callbacks.iter().position(|c| c.output == output) {
            Some(idx) => {
                tracing::warn!(%output, "replacing existing callback");
                self.callbacks[idx] = callback;
            }
            None => self.callbacks.push(callback),
        }
        self
    }

    /// All bound outputs
    pub fn outputs(&self) -> Vec<OutputId> {
        self.callbacks.iter().map(|c| c.output).collect()
    }

    /// Outputs that must be redrawn when `input` changes
    pub fn outputs_for(&self, input: InputId) -> Vec<OutputId> {
        self.callbacks
            .iter()
            .filter(|c| c.inputs.contains(&input))
            .map(|c| c.output)
            .collect()
    }

    /// Render every output, used for the initial page/frame
    pub fn render_all(
        &self,
        dataset: &LaunchDataset,
        selection: &FilterSelection,
    ) -> Result<Vec<(OutputId, ChartSpec)>> {
        self.callbacks
            .iter()
            .map(|c| Ok((c.output, (c.render)(dataset, selection)?)))
            .collect()
    }

    /// Re-render the outputs that depend on `input`
    pub fn on_change(
        &self,
        input: InputId,
        dataset: &LaunchDataset,
        selection: &FilterSelection,
    ) -> Result<Vec<(OutputId, ChartSpec)>> {
        tracing::debug!(%input, site = %selection.site(), "input changed");
        self.callbacks
            .iter()
            .filter(|c| c.inputs.contains(&input))
            .map(|c| Ok((c.output, (c.render)(dataset, selection)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::columns::{
        SRC_BOOSTER_CATEGORY, SRC_CLASS, SRC_LAUNCH_SITE, SRC_PAYLOAD_MASS,
    };
    use crate::state::{PayloadRange, SiteChoice};
    use polars::prelude::*;

    fn dataset() -> LaunchDataset {
        let df = df!(
            SRC_LAUNCH_SITE => ["A", "A", "B"],
            SRC_PAYLOAD_MASS => [500.0, 1500.0, 800.0],
            SRC_CLASS => [1i32, 0, 1],
            SRC_BOOSTER_CATEGORY => ["v1.0", "FT", "FT"]
        )
        .unwrap();
        LaunchDataset::from_dataframe(df, None).unwrap()
    }

    #[test]
    fn test_dependencies() {
        let registry = CallbackRegistry::standard();

        assert_eq!(
            registry.outputs(),
            vec![OutputId::SuccessPieChart, OutputId::SuccessPayloadScatterChart]
        );
        assert_eq!(
            registry.outputs_for(InputId::SiteDropdown),
            vec![OutputId::SuccessPieChart, OutputId::SuccessPayloadScatterChart]
        );
        assert_eq!(
            registry.outputs_for(InputId::PayloadSlider),
            vec![OutputId::SuccessPayloadScatterChart]
        );
    }

    #[test]
    fn test_render_all_for_default_selection() {
        let ds = dataset();
        let registry = CallbackRegistry::standard();
        let charts = registry
            .render_all(&ds, &FilterSelection::all(ds.payload_bounds()))
            .unwrap();

        assert_eq!(charts.len(), 2);
        match &charts[0] {
            (OutputId::SuccessPieChart, ChartSpec::Pie(pie)) => assert_eq!(pie.total(), 2),
            other => panic!("unexpected {:?}", other),
        }
        match &charts[1] {
            (OutputId::SuccessPayloadScatterChart, ChartSpec::Scatter(s)) => {
                assert_eq!(s.point_count(), 3)
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_slider_change_only_redraws_scatter() {
        let ds = dataset();
        let registry = CallbackRegistry::standard();
        let selection = FilterSelection::new(
            SiteChoice::Site("A".into()),
            PayloadRange::new(0.0, 1000.0).unwrap(),
        );

        let updated = registry
            .on_change(InputId::PayloadSlider, &ds, &selection)
            .unwrap();

        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].0, OutputId::SuccessPayloadScatterChart);
        assert_eq!(
            updated[0].1.title(),
            "Correlation between Payload and Success for site A"
        );
        match &updated[0].1 {
            ChartSpec::Scatter(s) => assert_eq!(s.point_count(), 1),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_register_replaces_binding() {
        let ds = dataset();
        let mut registry = CallbackRegistry::standard();
        registry.register(OutputId::SuccessPieChart, &[InputId::PayloadSlider], payload_scatter);

        assert_eq!(registry.outputs().len(), 2);
        assert_eq!(registry.outputs_for(InputId::PayloadSlider).len(), 2);

        let rendered = registry
            .render_all(&ds, &FilterSelection::all(ds.payload_bounds()))
            .unwrap();
        assert_eq!(rendered[0].0, OutputId::SuccessPieChart);
        assert!(matches!(rendered[0].1, ChartSpec::Scatter(_)));

        assert!(
            CallbackRegistry::new()
                .render_all(&ds, &FilterSelection::all(ds.payload_bounds()))
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_output_ids_serialize_as_names() {
        assert_eq!(
            serde_json::to_string(&OutputId::SuccessPayloadScatterChart).unwrap(),
            "\"success-payload-scatter-chart\""
        );
        assert_eq!(InputId::PayloadSlider.to_string(), "payload-slider");
    }
}
