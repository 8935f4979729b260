//! Fixed injury catalogue.
//!
//! Maps each category name to a feature vector and an ordered list of
//! first-aid recommendations. A [`Catalogue`] is validated once on
//! construction and never mutated afterwards, so it can be shared across
//! threads without locking.
//!
//! Iteration order is the definition order. The matcher relies on it to break
//! distance ties.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of components in every feature vector.
pub const FEATURE_DIM: usize = 3;

/// Severity/urgency coordinates of a category.
pub type FeatureVector = [u32; FEATURE_DIM];

/// Fallback category for unidentifiable injuries.
pub const FALLBACK_CATEGORY: &str = "otro";

/// Converts a feature vector into matcher query coordinates.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Reason: catalogue components are small integers
pub fn to_query(features: &FeatureVector) -> [f32; FEATURE_DIM] {
    features.map(|x| x as f32)
}

/// A named catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique lowercase identifier.
    pub name: String,
    /// Coordinates used for distance computation.
    pub features: FeatureVector,
    /// Advice strings, in definition order.
    pub recommendations: Vec<String>,
}

impl Category {
    /// Creates a new category. The name is lowercased.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        features: FeatureVector,
        recommendations: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into().to_lowercase(),
            features,
            recommendations: recommendations.into_iter().map(Into::into).collect(),
        }
    }

    /// Feature vector as `f32` coordinates for the distance engine.
    #[must_use]
    pub fn features_f32(&self) -> [f32; FEATURE_DIM] {
        to_query(&self.features)
    }
}

/// Immutable, insertion-ordered table of categories.
#[derive(Debug, Clone)]
pub struct Catalogue {
    categories: IndexMap<String, Category>,
}

impl Catalogue {
    /// Builds a catalogue, validating its invariants.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyCatalogue`] if `categories` is empty
    /// - [`Error::EmptyRecommendationSet`] if a category has no recommendations
    /// - [`Error::DuplicateCategory`] if two names collide after lowercasing
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        if categories.is_empty() {
            return Err(Error::EmptyCatalogue);
        }

        let mut map = IndexMap::with_capacity(categories.len());
        for mut category in categories {
            category.name = category.name.to_lowercase();
            if category.recommendations.is_empty() {
                return Err(Error::EmptyRecommendationSet(category.name));
            }
            if map.contains_key(&category.name) {
                return Err(Error::DuplicateCategory(category.name));
            }
            map.insert(category.name.clone(), category);
        }

        tracing::debug!(categories = map.len(), "Catalogue built");
        Ok(Self { categories: map })
    }

    /// The built-in first-aid catalogue.
    #[must_use]
    pub fn builtin() -> Self {
        let categories = BUILTIN
            .iter()
            .map(|(name, features, recs)| Category::new(*name, *features, recs.iter().copied()))
            .collect();
        Self::new(categories).unwrap_or_else(|e| unreachable!("built-in catalogue is valid: {e}"))
    }

    /// Returns the feature vector of `name` (case-insensitive, exact match).
    pub fn lookup_vector(&self, name: &str) -> Result<FeatureVector> {
        self.find(name).map(|c| c.features)
    }

    /// Returns the recommendations of `name` (case-insensitive, exact match).
    pub fn recommendations_for(&self, name: &str) -> Result<&[String]> {
        self.find(name).map(|c| c.recommendations.as_slice())
    }

    /// Iterates `(name, feature_vector)` pairs in definition order.
    pub fn list_categories(&self) -> impl Iterator<Item = (&str, &FeatureVector)> + '_ {
        self.categories
            .values()
            .map(|c| (c.name.as_str(), &c.features))
    }

    /// Iterates category names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.keys().map(String::as_str)
    }

    /// Iterates full category entries in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> + '_ {
        self.categories.values()
    }

    /// Returns the category named `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.get(name.to_lowercase().as_str())
    }

    /// Returns the category at definition position `index`, if any.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Category> {
        self.categories.get_index(index).map(|(_, c)| c)
    }

    /// Returns true if `name` is a catalogue key.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always false for a catalogue built through [`Catalogue::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    fn find(&self, name: &str) -> Result<&Category> {
        self.get(name)
            .ok_or_else(|| Error::UnknownCategory(name.to_lowercase()))
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::builtin()
    }
}

type BuiltinEntry = (&'static str, FeatureVector, &'static [&'static str]);

const BUILTIN: &[BuiltinEntry] = &[
    (
        FALLBACK_CATEGORY,
        [0, 0, 0],
        &[
            "No se reconoce la lesión.",
            "Prueba de nuevo para identificar la lesión.",
            "No se puede identificar la lesión con certeza.",
        ],
    ),
    (
        "normal",
        [1, 1, 1],
        &[
            "No hay lesión visible en la piel.",
            "No se requieren primeros auxilios ni atención médica.",
            "La zona parece estar en condiciones normales; solo vigila cualquier cambio.",
        ],
    ),
    (
        "corte",
        [3, 3, 2],
        &[
            "Lava la herida con agua corriente y jabón antibacteriano durante al menos 5 minutos.",
            "Desinfecta con solución antiséptica como povidona yodada o alcohol isopropílico.",
            "Aplica una pomada antibiótica y cubre con un apósito estéril cambiándolo diariamente.",
            "Mantén la herida elevada para reducir la inflamación y evita actividades que puedan irritarla.",
        ],
    ),
    (
        "raspon",
        [2, 2, 1],
        &[
            "Limpia suavemente con agua tibia y jabón, evitando frotar la piel dañada.",
            "Aplica una crema hidratante calmante como aloe vera o vaselina para acelerar la cicatrización.",
            "Evita exponer la zona al sol directo hasta que se haya curado completamente.",
            "Si hay sangrado, aplica presión directa con un paño limpio durante 10-15 minutos.",
        ],
    ),
    (
        "moreton",
        [2, 2, 1],
        &[
            "Aplica compresas de hielo envueltas en un paño durante 15-20 minutos cada hora.",
            "Eleva la zona afectada por encima del nivel del corazón para reducir la hinchazón.",
            "Usa analgésicos de venta libre como ibuprofeno para aliviar el dolor y la inflamación.",
            "Masajea suavemente la zona después de 48 horas con aceite de ricino o crema anti-moretones.",
        ],
    ),
    (
        "quemadura",
        [4, 4, 3],
        &[
            "Enfría inmediatamente la quemadura bajo agua fría corriente durante 10-15 minutos.",
            "Cubre la zona con gasa esterilizada sin aplicar ninguna crema ni ungüento.",
            "Para quemaduras leves, aplica gel de aloe vera varias veces al día para aliviar el dolor.",
            "Busca atención médica urgente si la quemadura es profunda, mayor a 3 pulgadas de diámetro, o afecta manos, pies, cara o articulaciones.",
        ],
    ),
    (
        "picadura",
        [3, 3, 2],
        &[
            "Extrae el aguijón si está presente usando pinzas esterilizadas y lava la zona con agua y jabón.",
            "Aplica una pasta de bicarbonato de sodio y agua para neutralizar el veneno y reducir la comezón.",
            "Usa cremas antihistamínicas tópicas como benadryl para aliviar el picor e hinchazón.",
            "Monitorea signos de reacción alérgica severa como dificultad respiratoria, mareos o urticaria generalizada.",
        ],
    ),
    (
        "desmayo",
        [5, 5, 1],
        &[
            "Coloca al paciente en posición de Trendelenburg (piernas elevadas) y asegúrate de que respire adecuadamente.",
            "Brinda líquidos azucarados como jugo de naranja o bebidas deportivas para restaurar glucosa en sangre.",
            "Verifica signos vitales como pulso y respiración; si son irregulares, llama a emergencias.",
            "Permite que descanse en un lugar tranquilo y ventilado durante al menos 30 minutos antes de intentar levantarlo.",
        ],
    ),
    (
        "atragantamiento",
        [5, 5, 5],
        &[
            "Fomenta al paciente a toser vigorosamente mientras lo apoyas desde atrás.",
            "Realiza la maniobra de Heimlich: colócate detrás, abraza la cintura, y aplica cinco golpes rápidos entre los omóplatos seguidos de cinco compresiones abdominales.",
            "Si el objeto obstructor es visible en la boca, intenta retirarlo con cuidado usando pinzas esterilizadas.",
            "Llama al servicio de emergencias inmediatamente si el paciente pierde el conocimiento o no puede coughing.",
        ],
    ),
];
