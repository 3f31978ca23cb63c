use std::path::Path;

use crate::color::ColorMap;
use crate::config::BrowserConfig;
use crate::data::loader;
use crate::data::model::{CategoryField, Company, CompanyStore};
use crate::data::options::{self, OptionCount};
use crate::data::pipeline;
use crate::data::view::{Action, ViewState};
use crate::export::{ExportError, ExportFormat};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: BrowserConfig,

    /// Loaded dataset (empty until a file is loaded).
    pub store: CompanyStore,

    /// Filter and sort settings, replaced on every action.
    pub view: ViewState,

    /// Colours for the company-type column.
    pub type_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(BrowserConfig::default())
    }
}

impl AppState {
    pub fn new(config: BrowserConfig) -> Self {
        let view = ViewState::new(&config.domains);
        Self {
            config,
            store: CompanyStore::default(),
            view,
            type_colors: ColorMap::default(),
            status_message: None,
        }
    }

    /// Load the configured startup dataset if it exists.
    pub fn load_startup_dataset(&mut self) {
        let path = self.config.dataset_path.clone();
        if !path.exists() {
            log::warn!("Startup dataset {} not found, starting empty", path.display());
            return;
        }
        self.load_path(&path);
    }

    /// Load a dataset file, reporting failures in the status line.
    pub fn load_path(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(store) => self.set_store(store),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Replace the dataset and reset filters and sort order.
    pub fn set_store(&mut self, store: CompanyStore) {
        let types = options::distinct_values(store.companies(), CategoryField::Type);
        log::info!(
            "Dataset with {} companies, {} types",
            store.len(),
            types.len()
        );
        self.type_colors = ColorMap::new(&types);
        self.store = store;
        self.view = ViewState::new(&self.config.domains);
        self.status_message = None;
    }

    /// Apply a user action to the view state.
    pub fn dispatch(&mut self, action: Action) {
        log::debug!("{action:?}");
        self.view = self.view.reduce(action, &self.config.domains);
    }

    /// Rows to display, recomputed from the store and view state.
    pub fn visible(&self) -> Vec<&Company> {
        pipeline::run(self.store.companies(), &self.view.filter, &self.view.sort)
    }

    /// Choices and full-dataset counts for a filter panel.
    pub fn options(&self, field: CategoryField) -> Vec<OptionCount> {
        options::option_counts(self.store.companies(), field)
    }

    /// Export the visible rows to `path`.
    pub fn export(&self, format: ExportFormat, path: &Path) -> Result<(), ExportError> {
        format.write(&self.visible(), &self.config, path)
    }
}
