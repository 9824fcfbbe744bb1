//! The customizer session: one active design and the actions that change it.
//!
//! [`Customizer`] is the single owner of a [`DesignStore`]. Synchronous edits
//! (colors, material, text, reset) apply immediately. Asynchronous actions go
//! through the studio API and each holds an [`InFlightToken`] from its own
//! gate for the duration of the call, so a second call of the same action
//! fails with [`CustomizerError::Busy`] before any request is sent.
//!
//! The store is only touched after a call succeeds. A failed action leaves
//! the active design exactly as it was.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::instrument;

use solecraft_core::{
    ColorScheme, ConfigurationPatch, CustomText, DesignId, DesignName, DesignStore, GateState,
    HexColor, InFlightGate, InFlightToken, Material, NewDesign, Part, Product, SavedDesign,
    SneakerConfiguration, TagSet, check_part_color, render_svg,
};

use crate::api::ApiClient;
use crate::error::{Action, CustomizerError};

#[derive(Debug, Default)]
struct Gates {
    ask_ai: InFlightGate,
    save: InFlightGate,
    delete: InFlightGate,
    load: InFlightGate,
    product: InFlightGate,
}

impl Gates {
    const fn get(&self, action: Action) -> &InFlightGate {
        match action {
            Action::AskAi => &self.ask_ai,
            Action::Save => &self.save,
            Action::Delete => &self.delete,
            Action::Load => &self.load,
            Action::Product => &self.product,
        }
    }
}

/// A customization session against the studio.
///
/// Methods take `&self`; share the session behind an `Arc` to drive several
/// actions at once.
pub struct Customizer {
    api: ApiClient,
    store: Mutex<DesignStore>,
    gates: Gates,
}

impl Customizer {
    /// Start a session on the built-in default design.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            store: Mutex::new(DesignStore::new()),
            gates: Gates::default(),
        }
    }

    #[must_use]
    pub const fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Copy of the store as it is right now.
    #[must_use]
    pub fn store(&self) -> DesignStore {
        self.lock().clone()
    }

    /// The active configuration.
    #[must_use]
    pub fn configuration(&self) -> SneakerConfiguration {
        self.lock().snapshot()
    }

    /// SVG preview of the active configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CustomizerError::Render`] if the template fails.
    pub fn preview_svg(&self) -> Result<String, CustomizerError> {
        Ok(render_svg(self.lock().configuration())?)
    }

    /// Whether `action` is currently running.
    #[must_use]
    pub fn gate_state(&self, action: Action) -> GateState {
        self.gates.get(action).state()
    }

    /// Set one part's color.
    ///
    /// # Errors
    ///
    /// Returns [`CustomizerError::Contrast`] for a black logo on a black
    /// upper, in either order.
    pub fn set_part_color(&self, part: Part, color: HexColor) -> Result<(), CustomizerError> {
        let mut store = self.lock();
        check_part_color(store.configuration(), part, &color)?;
        store.merge_update(ConfigurationPatch::color(part, color));
        Ok(())
    }

    pub fn set_material(&self, material: Material) {
        self.lock()
            .merge_update(ConfigurationPatch::default().with_material(material));
    }

    /// Set the heel text. An empty string clears it.
    ///
    /// # Errors
    ///
    /// Returns [`CustomizerError::Text`] if the text is too long.
    pub fn set_custom_text(&self, text: &str) -> Result<(), CustomizerError> {
        let text = CustomText::parse(text)?;
        self.lock()
            .merge_update(ConfigurationPatch::default().with_custom_text(Some(text)));
        Ok(())
    }

    /// Back to the built-in default design. The selected product is kept.
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Load the default product and make it active.
    ///
    /// # Errors
    ///
    /// Returns an error if the product action is busy or the request fails.
    #[instrument(skip(self))]
    pub async fn load_default_product(&self) -> Result<Product, CustomizerError> {
        let _token = self.begin(Action::Product)?;
        let product = self.api.default_product().await?;

        self.lock().select(&product);
        tracing::info!(product = %product.name, "Product selected");
        Ok(product)
    }

    /// Ask the AI designer and apply the suggested colors.
    ///
    /// Material and text are kept. The contrast guard does not apply to
    /// suggestions.
    ///
    /// # Errors
    ///
    /// Returns an error if the AI action is busy or the studio call fails;
    /// rate limiting and quota exhaustion keep their own variants.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn ask_ai_designer(&self, prompt: &str) -> Result<ColorScheme, CustomizerError> {
        let _token = self.begin(Action::AskAi)?;
        let scheme = self.api.suggest_colors(prompt).await?;

        self.lock().merge_update(scheme.clone().into());
        tracing::info!("AI colors applied");
        Ok(scheme)
    }

    /// Save a snapshot of the active design.
    ///
    /// # Errors
    ///
    /// Returns [`CustomizerError::Name`] for a blank name, or an error if the
    /// save action is busy or the request fails.
    #[instrument(skip(self, tags))]
    pub async fn save_design<I, S>(&self, name: &str, tags: I) -> Result<SavedDesign, CustomizerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = DesignName::parse(name)?;
        let _token = self.begin(Action::Save)?;

        let design = {
            let store = self.lock();
            NewDesign {
                product_id: store.product_id(),
                name,
                configuration: store.snapshot(),
                tags: tags.into_iter().collect::<TagSet>(),
            }
        };

        let saved = self.api.save_design(&design).await?;
        tracing::info!(design_id = %saved.id, "Design saved");
        Ok(saved)
    }

    /// The owner's saved designs, newest first, optionally filtered.
    ///
    /// # Errors
    ///
    /// Returns an error if the load action is busy or the request fails.
    #[instrument(skip(self))]
    pub async fn list_designs(&self, query: Option<&str>) -> Result<Vec<SavedDesign>, CustomizerError> {
        let _token = self.begin(Action::Load)?;
        Ok(self.api.list_designs(query).await?)
    }

    /// Make a saved design active, along with its product.
    ///
    /// # Errors
    ///
    /// Returns an error if the load action is busy or the design's product
    /// cannot be fetched.
    #[instrument(skip(self, design), fields(design_id = %design.id))]
    pub async fn load_design(&self, design: &SavedDesign) -> Result<(), CustomizerError> {
        let _token = self.begin(Action::Load)?;
        let product = self.api.get_product(design.product_id).await?;

        self.lock().select_product(
            product.id,
            product.name,
            product.base_price,
            design.configuration.clone(),
        );
        tracing::info!("Design loaded");
        Ok(())
    }

    /// Delete a saved design. The active design is unaffected.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete action is busy, or
    /// [`crate::ClientError::NotFound`] if the design is already gone.
    #[instrument(skip(self))]
    pub async fn delete_design(&self, id: DesignId) -> Result<(), CustomizerError> {
        let _token = self.begin(Action::Delete)?;
        self.api.delete_design(id).await?;
        tracing::info!("Design deleted");
        Ok(())
    }

    fn begin(&self, action: Action) -> Result<InFlightToken, CustomizerError> {
        self.gates
            .get(action)
            .try_begin()
            .ok_or(CustomizerError::Busy(action))
    }

    fn lock(&self) -> MutexGuard<'_, DesignStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
