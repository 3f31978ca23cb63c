use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Field;
use crate::data::view::Action;
use crate::format::format_de;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Company table (central panel)
// ---------------------------------------------------------------------------

/// Render the sortable company table in the central panel.
pub fn company_table(ui: &mut Ui, state: &mut AppState) {
    ui.heading(state.config.document_title);
    ui.add_space(6.0);

    if state.store.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Keine Daten geladen  (Datei → Öffnen…)");
        });
        return;
    }

    let mut clicked = None;
    {
        let rows = state.visible();
        let sort = state.view.sort;
        let colors = &state.type_colors;

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(220.0).at_least(80.0))
            .columns(Column::auto().at_least(70.0), Field::ALL.len() - 2)
            .column(Column::remainder())
            .header(24.0, |mut header| {
                for field in Field::ALL {
                    header.col(|ui: &mut Ui| {
                        let arrow = if sort.key == Some(field) {
                            sort.direction.arrow()
                        } else {
                            ""
                        };
                        let title = RichText::new(format!("{} {arrow}", field.label())).strong();
                        if ui.add(egui::Button::new(title).frame(false)).clicked() {
                            clicked = Some(field);
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(20.0, rows.len(), |mut row| {
                    let c = rows[row.index()];
                    row.col(|ui: &mut Ui| {
                        ui.label(c.name.as_str());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(
                            RichText::new(&c.company_type).color(colors.color_for(&c.company_type)),
                        );
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(c.region.as_str());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(c.industry.as_str());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{} €", format_de(c.revenue)));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(c.headcount.to_string());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(c.founding_year.to_string());
                    });
                });
            });
    }

    if let Some(field) = clicked {
        state.dispatch(Action::SortBy(field));
    }
}
