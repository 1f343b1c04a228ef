//! Control Panel Widget
//! Left side panel with the simulation parameters and live read-outs.

use crate::charts::{OK_COLOR, WARNING_COLOR};
use crate::sim::{Parameter, SimulationState};
use egui::{Color32, RichText};

/// What the user asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlPanelAction {
    None,
    Toggle,
    Reset,
    SetParameter(Parameter, f64),
}

/// Left side panel driving the simulation.
///
/// The panel holds no simulation state of its own; it renders the state it is
/// given and reports at most one action per frame.
#[derive(Default)]
pub struct ControlPanel;

impl ControlPanel {
    pub fn new() -> Self {
        Self
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui, state: &SimulationState) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("Twinscope")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Process Simulation")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Parameters Section =====
        ui.label(RichText::new("⚙️ Parameters").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                for parameter in Parameter::ALL {
                    if let Some(value) = Self::parameter_slider(ui, state, parameter) {
                        action = ControlPanelAction::SetParameter(parameter, value);
                    }
                    ui.add_space(4.0);
                }
                if state.running {
                    ui.label(
                        RichText::new("Temperature and pressure are locked while running")
                            .size(10.0)
                            .color(Color32::GRAY),
                    );
                }
            });

        ui.add_space(10.0);

        // ===== Run Controls =====
        ui.horizontal(|ui| {
            let toggle_text = if state.running {
                "⏸ Pause"
            } else {
                "▶ Start Simulation"
            };
            if ui
                .add_sized([170.0, 32.0], egui::Button::new(RichText::new(toggle_text).size(14.0)))
                .clicked()
            {
                action = ControlPanelAction::Toggle;
            }
            if ui
                .add_sized([90.0, 32.0], egui::Button::new(RichText::new("⟲ Reset").size(14.0)))
                .clicked()
            {
                action = ControlPanelAction::Reset;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Results Section =====
        ui.label(RichText::new("📈 Simulation Results").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("sim_results")
                    .num_columns(2)
                    .spacing([20.0, 6.0])
                    .show(ui, |ui| {
                        let readouts = [
                            ("Temperature", format!("{:.1} °C", state.temperature)),
                            ("Flow Rate", format!("{:.2} m³/h", state.flow_rate)),
                            ("Efficiency", format!("{:.1} %", state.efficiency())),
                            ("Power Draw", format!("{} kW", state.power_draw())),
                            ("Elapsed", state.elapsed_label()),
                            ("Next Maintenance", format!("{} days", state.maintenance_days())),
                        ];
                        for (label, value) in readouts {
                            ui.label(RichText::new(label).size(12.0).color(Color32::GRAY));
                            ui.label(RichText::new(value).size(13.0).strong());
                            ui.end_row();
                        }

                        ui.label(RichText::new("Status").size(12.0).color(Color32::GRAY));
                        let status_color = if state.running { OK_COLOR } else { Color32::GRAY };
                        ui.label(
                            RichText::new(state.status_label())
                                .size(13.0)
                                .strong()
                                .color(status_color),
                        );
                        ui.end_row();
                    });
            });

        if state.overheat_warning {
            ui.add_space(8.0);
            egui::Frame::none()
                .stroke(egui::Stroke::new(1.5, WARNING_COLOR))
                .rounding(5.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.label(
                        RichText::new("⚠ Warning: system parameters exceeding safe limits")
                            .size(12.0)
                            .color(WARNING_COLOR),
                    );
                });
        }

        action
    }

    /// One labelled slider. Returns the new value when the user moved it.
    fn parameter_slider(
        ui: &mut egui::Ui,
        state: &SimulationState,
        parameter: Parameter,
    ) -> Option<f64> {
        let mut value = state.parameter(parameter);
        let before = value;

        ui.label(RichText::new(parameter.label()).size(12.0));
        let mut slider = egui::Slider::new(&mut value, parameter.range())
            .step_by(parameter.step())
            .suffix(format!(" {}", parameter.unit()));
        slider = if parameter == Parameter::Pressure {
            slider.fixed_decimals(1)
        } else {
            slider.fixed_decimals(0)
        };

        let enabled = !(state.running && parameter.locked_while_running());
        let response = ui.add_enabled(enabled, slider);

        (response.changed() && value != before).then_some(value)
    }
}
