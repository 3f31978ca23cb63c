use eframe::egui::{self, emath::Numeric, Color32, RichText, ScrollArea, Ui};

use crate::data::controls::{Endpoint, RangeControl, RangeValue};
use crate::data::filter::ClosedRange;
use crate::data::model::CategoryField;
use crate::data::view::Action;
use crate::export::ExportFormat;
use crate::format::format_de;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for field in CategoryField::ALL {
                choice_panel(ui, state, field);
                ui.add_space(4.0);
            }
            ui.separator();
            range_panels(ui, state);
            ui.add_space(8.0);

            if ui
                .add_sized([ui.available_width(), 28.0], egui::Button::new("Zurücksetzen"))
                .clicked()
            {
                state.dispatch(Action::Reset);
            }
        });
}

/// Checkbox list for one categorical field, with "Alle" / "Zurücksetzen"
/// buttons and the full-dataset count next to each choice.
fn choice_panel(ui: &mut Ui, state: &mut AppState, field: CategoryField) {
    let options = state.options(field);
    let selection = state.view.filter.selection(field).clone();

    egui::CollapsingHeader::new(RichText::new(field.panel_label()).strong())
        .id_salt(field.panel_label())
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("Alle").clicked() {
                    let values = options.iter().map(|o| o.value.clone()).collect();
                    state.dispatch(Action::SelectAll(field, values));
                }
                if ui.small_button("Zurücksetzen").clicked() {
                    state.dispatch(Action::ClearSelection(field));
                }
            });

            for opt in &options {
                let mut checked = selection.contains(&opt.value);
                let mut text = RichText::new(&opt.value);
                if field == CategoryField::Type {
                    text = text.color(state.type_colors.color_for(&opt.value));
                }
                ui.horizontal(|ui: &mut Ui| {
                    if ui.checkbox(&mut checked, text).changed() {
                        state.dispatch(Action::Toggle(field, opt.value.clone()));
                    }
                    ui.label(RichText::new(format!("({})", opt.count)).small().weak());
                });
            }
        });
}

fn range_panels(ui: &mut Ui, state: &mut AppState) {
    let domains = state.config.domains;
    let filter = &state.view.filter;

    let revenue = filter.revenue.resolve(domains.revenue);
    let caption = format!("{} – {}", format_de(revenue.min()), format_de(revenue.max()));
    let mut actions = Vec::new();
    if let Some((end, v)) = range_control(ui, "Umsatz (€)", &caption, revenue, domains.revenue) {
        actions.push(Action::Revenue(end, v));
    }

    let headcount = filter.headcount;
    let caption = format!("{} – {}", headcount.min(), headcount.max());
    if let Some((end, v)) = range_control(ui, "Mitarbeiter", &caption, headcount, domains.headcount)
    {
        actions.push(Action::Headcount(end, v));
    }

    let years = filter.founding_year;
    let caption = format!("{} – {}", years.min(), years.max());
    if let Some((end, v)) = range_control(ui, "Gründerjahr", &caption, years, domains.founding_year)
    {
        actions.push(Action::FoundingYear(end, v));
    }

    for action in actions {
        state.dispatch(action);
    }
}

/// Two number fields for the ends of a range. Returns the edited handle and
/// its new value; normalization happens in the reducer.
fn range_control<T>(
    ui: &mut Ui,
    label: &str,
    caption: &str,
    current: ClosedRange<T>,
    domain: ClosedRange<T>,
) -> Option<(Endpoint, T)>
where
    T: RangeValue + Numeric,
{
    let control = RangeControl::new(domain);
    let mut edited = None;

    ui.horizontal(|ui: &mut Ui| {
        ui.strong(label);
        ui.label(RichText::new(caption).small().weak());
    });
    ui.horizontal(|ui: &mut Ui| {
        let ends = [
            (Endpoint::Lower, current.min()),
            (Endpoint::Upper, current.max()),
        ];
        for (endpoint, start) in ends {
            let mut value = start;
            let response = ui.add(
                egui::DragValue::new(&mut value)
                    .range(domain.min()..=domain.max())
                    .custom_parser(move |text| Some(control.parse_input(text, endpoint).to_f64())),
            );
            if response.changed() {
                edited = Some((endpoint, value));
            }
        }
    });
    ui.add_space(4.0);
    edited
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Datei", |ui: &mut Ui| {
            if ui.button("Öffnen…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.menu_button("Exportieren", |ui: &mut Ui| {
            for format in ExportFormat::ALL {
                if ui.button(format.label()).clicked() {
                    save_file_dialog(state, format);
                    ui.close_menu();
                }
            }
        });

        ui.separator();

        if !state.store.is_empty() {
            ui.label(format!(
                "{} von {} Firmen",
                state.visible().len(),
                state.store.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Firmendaten öffnen")
        .add_filter("Unterstützte Dateien", &["json", "csv", "parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}

pub fn save_file_dialog(state: &mut AppState, format: ExportFormat) {
    let file = rfd::FileDialog::new()
        .set_title("Exportieren")
        .set_file_name(format.default_file_name(&state.config))
        .add_filter(format.label(), &[format.extension()])
        .save_file();

    let Some(path) = file else {
        return;
    };
    match state.export(format, &path) {
        Ok(()) => state.status_message = None,
        Err(e) => {
            log::error!("Export failed: {e}");
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}
