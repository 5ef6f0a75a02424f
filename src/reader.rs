use std::{io::Read, path::Path, sync::Arc};

use glam::Vec2;

use crate::{
    config::UTF8_BOM,
    core::{
        setting::{PhysicsInput, PhysicsOutput, PhysicsParticle, PhysicsSetting},
        types::{ComponentType, Normalization},
    },
    error::{PhysicsJsonError, Result},
    schema::{DictionaryEntry, PhysicsDocument},
    utils::{
        coerce::truncate_to_i32,
        logging::{log_document_summary, ScopedTimer},
        registry::{IdRegistry, ParameterId},
    },
};

fn element<'a, T>(items: &'a [T], collection: &'static str, index: usize) -> Result<&'a T> {
    items.get(index).ok_or(PhysicsJsonError::IndexOutOfRange {
        collection,
        index,
        len: items.len(),
    })
}

/// Typed, read-only view of a rig physics document.
///
/// The document is parsed once at construction and every parameter name is
/// interned through the injected [`IdRegistry`]. Accessors are direct field
/// reads; indices are bounds checked and report [`PhysicsJsonError::IndexOutOfRange`].
/// Dropping the reader releases the document.
#[derive(Debug)]
pub struct PhysicsJson {
    version: Option<u32>,
    gravity: Vec2,
    wind: Vec2,
    physics_setting_count: usize,
    total_input_count: usize,
    total_output_count: usize,
    vertex_count: usize,
    fps: Option<f32>,
    dictionary: Vec<DictionaryEntry>,
    settings: Vec<PhysicsSetting>,
    ids: Arc<IdRegistry>,
}

impl PhysicsJson {
    /// Parses the first `size` bytes of `buffer`.
    pub fn new(buffer: &[u8], size: usize, ids: Arc<IdRegistry>) -> Result<Self> {
        let bytes = buffer
            .get(..size)
            .ok_or(PhysicsJsonError::TruncatedBuffer {
                size,
                available: buffer.len(),
            })?;
        Self::from_slice(bytes, ids)
    }

    pub fn from_slice(bytes: &[u8], ids: Arc<IdRegistry>) -> Result<Self> {
        let document: PhysicsDocument = {
            let _timer = ScopedTimer::new("parse physics json");
            let bytes = bytes.strip_prefix(&UTF8_BOM[..]).unwrap_or(bytes);
            serde_json::from_slice(bytes)?
        };
        Ok(Self::from_document(document, ids))
    }

    pub fn parse_str(text: &str, ids: Arc<IdRegistry>) -> Result<Self> {
        Self::from_slice(text.as_bytes(), ids)
    }

    pub fn from_reader<R: Read>(mut reader: R, ids: Arc<IdRegistry>) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_slice(&bytes, ids)
    }

    pub fn from_path(path: impl AsRef<Path>, ids: Arc<IdRegistry>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("reading physics json from {}", path.display());
        let bytes = std::fs::read(path)?;
        Self::from_slice(&bytes, ids)
    }

    /// Builds a reader from an already deserialized document.
    pub fn from_document(document: PhysicsDocument, ids: Arc<IdRegistry>) -> Self {
        log_document_summary(&document);

        let PhysicsDocument {
            version,
            meta,
            physics_settings,
        } = document;

        let settings = {
            let _timer = ScopedTimer::new("resolve physics settings");
            physics_settings
                .into_iter()
                .map(|record| PhysicsSetting::resolve(record, &ids))
                .collect()
        };

        Self {
            version,
            gravity: meta.effective_forces.gravity.into(),
            wind: meta.effective_forces.wind.into(),
            physics_setting_count: meta.physics_setting_count,
            total_input_count: meta.total_input_count,
            total_output_count: meta.total_output_count,
            vertex_count: meta.vertex_count,
            fps: meta.fps,
            dictionary: meta.physics_dictionary,
            settings,
            ids,
        }
    }

    /// Explicit teardown. Equivalent to dropping the reader.
    pub fn release(self) {
        log::trace!("releasing physics json ({} settings)", self.settings.len());
    }

    pub fn registry(&self) -> &Arc<IdRegistry> {
        &self.ids
    }

    pub fn version(&self) -> Option<u32> {
        self.version
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn wind(&self) -> Vec2 {
        self.wind
    }

    /// Setting count as declared in `Meta.PhysicsSettingCount`.
    ///
    /// May disagree with [`Self::physics_settings_len`]; per-setting accessors
    /// are bounded by the latter.
    pub fn sub_rig_count(&self) -> usize {
        self.physics_setting_count
    }

    /// Number of entries actually present in `PhysicsSettings`.
    pub fn physics_settings_len(&self) -> usize {
        self.settings.len()
    }

    pub fn total_input_count(&self) -> usize {
        self.total_input_count
    }

    pub fn total_output_count(&self) -> usize {
        self.total_output_count
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn fps(&self) -> Option<f32> {
        self.fps
    }

    pub fn dictionary(&self) -> &[DictionaryEntry] {
        &self.dictionary
    }

    pub fn settings(&self) -> &[PhysicsSetting] {
        &self.settings
    }

    pub fn setting(&self, physics_setting_index: usize) -> Result<&PhysicsSetting> {
        element(&self.settings, "PhysicsSettings", physics_setting_index)
    }

    pub fn setting_id(&self, physics_setting_index: usize) -> Result<Option<&str>> {
        Ok(self.setting(physics_setting_index)?.id.as_deref())
    }

    /// Display name from `Meta.PhysicsDictionary`.
    ///
    /// Matched by setting id when the setting has one, by position otherwise.
    pub fn setting_name(&self, physics_setting_index: usize) -> Result<Option<&str>> {
        let setting = self.setting(physics_setting_index)?;
        let entry = match setting.id.as_deref() {
            Some(id) => self.dictionary.iter().find(|entry| entry.id == id),
            None => self.dictionary.get(physics_setting_index),
        };
        Ok(entry.map(|entry| entry.name.as_str()))
    }

    // Normalization

    pub fn normalization(&self, physics_setting_index: usize) -> Result<Normalization> {
        Ok(self.setting(physics_setting_index)?.normalization)
    }

    pub fn normalization_position_minimum_value(&self, physics_setting_index: usize) -> Result<f32> {
        Ok(self.normalization(physics_setting_index)?.position.minimum)
    }

    pub fn normalization_position_maximum_value(&self, physics_setting_index: usize) -> Result<f32> {
        Ok(self.normalization(physics_setting_index)?.position.maximum)
    }

    pub fn normalization_position_default_value(&self, physics_setting_index: usize) -> Result<f32> {
        Ok(self.normalization(physics_setting_index)?.position.default)
    }

    pub fn normalization_angle_minimum_value(&self, physics_setting_index: usize) -> Result<f32> {
        Ok(self.normalization(physics_setting_index)?.angle.minimum)
    }

    pub fn normalization_angle_maximum_value(&self, physics_setting_index: usize) -> Result<f32> {
        Ok(self.normalization(physics_setting_index)?.angle.maximum)
    }

    pub fn normalization_angle_default_value(&self, physics_setting_index: usize) -> Result<f32> {
        Ok(self.normalization(physics_setting_index)?.angle.default)
    }

    // Input

    pub fn input_count(&self, physics_setting_index: usize) -> Result<usize> {
        Ok(self.setting(physics_setting_index)?.inputs.len())
    }

    pub fn input(&self, physics_setting_index: usize, input_index: usize) -> Result<&PhysicsInput> {
        element(&self.setting(physics_setting_index)?.inputs, "Input", input_index)
    }

    pub fn input_weight(&self, physics_setting_index: usize, input_index: usize) -> Result<f32> {
        Ok(self.input(physics_setting_index, input_index)?.weight)
    }

    pub fn input_reflect(&self, physics_setting_index: usize, input_index: usize) -> Result<bool> {
        Ok(self.input(physics_setting_index, input_index)?.reflect)
    }

    /// Raw `Type` tag; see [`Self::input_component`] for the parsed form.
    pub fn input_type(&self, physics_setting_index: usize, input_index: usize) -> Result<&str> {
        Ok(&self.input(physics_setting_index, input_index)?.kind)
    }

    pub fn input_component(
        &self,
        physics_setting_index: usize,
        input_index: usize,
    ) -> Result<ComponentType> {
        self.input_type(physics_setting_index, input_index)?.parse()
    }

    pub fn input_source_id(
        &self,
        physics_setting_index: usize,
        input_index: usize,
    ) -> Result<ParameterId> {
        Ok(self.input(physics_setting_index, input_index)?.source_id)
    }

    // Output

    pub fn output_count(&self, physics_setting_index: usize) -> Result<usize> {
        Ok(self.setting(physics_setting_index)?.outputs.len())
    }

    pub fn output(
        &self,
        physics_setting_index: usize,
        output_index: usize,
    ) -> Result<&PhysicsOutput> {
        element(&self.setting(physics_setting_index)?.outputs, "Output", output_index)
    }

    pub fn output_vertex_index(
        &self,
        physics_setting_index: usize,
        output_index: usize,
    ) -> Result<usize> {
        Ok(self.output(physics_setting_index, output_index)?.vertex_index)
    }

    pub fn output_angle_scale(&self, physics_setting_index: usize, output_index: usize) -> Result<f32> {
        Ok(self.output(physics_setting_index, output_index)?.angle_scale)
    }

    pub fn output_weight(&self, physics_setting_index: usize, output_index: usize) -> Result<f32> {
        Ok(self.output(physics_setting_index, output_index)?.weight)
    }

    pub fn output_destination_id(
        &self,
        physics_setting_index: usize,
        output_index: usize,
    ) -> Result<ParameterId> {
        Ok(self.output(physics_setting_index, output_index)?.destination_id)
    }

    pub fn output_type(&self, physics_setting_index: usize, output_index: usize) -> Result<&str> {
        Ok(&self.output(physics_setting_index, output_index)?.kind)
    }

    pub fn output_component(
        &self,
        physics_setting_index: usize,
        output_index: usize,
    ) -> Result<ComponentType> {
        self.output_type(physics_setting_index, output_index)?.parse()
    }

    pub fn output_reflect(&self, physics_setting_index: usize, output_index: usize) -> Result<bool> {
        Ok(self.output(physics_setting_index, output_index)?.reflect)
    }

    // Particles

    pub fn particle_count(&self, physics_setting_index: usize) -> Result<usize> {
        Ok(self.setting(physics_setting_index)?.particles.len())
    }

    pub fn particle(
        &self,
        physics_setting_index: usize,
        vertex_index: usize,
    ) -> Result<&PhysicsParticle> {
        element(&self.setting(physics_setting_index)?.particles, "Vertices", vertex_index)
    }

    pub fn particle_mobility(&self, physics_setting_index: usize, vertex_index: usize) -> Result<f32> {
        Ok(self.particle(physics_setting_index, vertex_index)?.mobility)
    }

    pub fn particle_delay(&self, physics_setting_index: usize, vertex_index: usize) -> Result<f32> {
        Ok(self.particle(physics_setting_index, vertex_index)?.delay)
    }

    pub fn particle_acceleration(
        &self,
        physics_setting_index: usize,
        vertex_index: usize,
    ) -> Result<f32> {
        Ok(self.particle(physics_setting_index, vertex_index)?.acceleration)
    }

    /// Radius truncated toward zero. Existing rigs are tuned against the
    /// integer value; the exact float is on [`PhysicsParticle::radius`].
    pub fn particle_radius(&self, physics_setting_index: usize, vertex_index: usize) -> Result<i32> {
        Ok(truncate_to_i32(
            self.particle(physics_setting_index, vertex_index)?.radius,
        ))
    }

    pub fn particle_position(
        &self,
        physics_setting_index: usize,
        vertex_index: usize,
    ) -> Result<Vec2> {
        Ok(self.particle(physics_setting_index, vertex_index)?.position)
    }
}
