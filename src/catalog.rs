//! Static reference data
//!
//! Everything here is read-only at runtime:
//! - exercise catalog (category -> level -> exercises)
//! - calorie table (activity -> intensity -> kcal/min at 70 kg)
//! - BMI bands
//! - reading resources shown on the resources page

use serde::Serialize;

/// ---------------------------------------------------------------------------
/// Exercise Catalog
/// ---------------------------------------------------------------------------

pub const CATEGORIES: [&str; 3] = ["strength", "cardio", "flexibility"];
pub const LEVELS: [&str; 3] = ["beginner", "intermediate", "advanced"];

/// Catalog entry. Strength entries carry `sets`, cardio and flexibility
/// entries carry `duration`; the descriptive text lives in whichever of
/// `description`, `intensity` or `style` the category uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExerciseDescriptor {
  pub name: &'static str,
  pub sets: Option<&'static str>,
  pub duration: Option<&'static str>,
  pub description: Option<&'static str>,
  pub intensity: Option<&'static str>,
  pub style: Option<&'static str>,
}

const fn strength(
  name: &'static str,
  sets: &'static str,
  description: &'static str,
) -> ExerciseDescriptor {
  ExerciseDescriptor {
    name,
    sets: Some(sets),
    duration: None,
    description: Some(description),
    intensity: None,
    style: None,
  }
}

const fn cardio(
  name: &'static str,
  duration: &'static str,
  intensity: &'static str,
) -> ExerciseDescriptor {
  ExerciseDescriptor {
    name,
    sets: None,
    duration: Some(duration),
    description: None,
    intensity: Some(intensity),
    style: None,
  }
}

const fn flexibility(
  name: &'static str,
  duration: &'static str,
  style: &'static str,
) -> ExerciseDescriptor {
  ExerciseDescriptor {
    name,
    sets: None,
    duration: Some(duration),
    description: None,
    intensity: None,
    style: Some(style),
  }
}

const STRENGTH_BEGINNER: &[ExerciseDescriptor] = &[
  strength("Flexiones", "3 x 8-12", "Ejercicio básico de empuje"),
  strength("Sentadillas", "3 x 10-15", "Fortalece piernas y glúteos"),
  strength("Plancha", "3 x 30s", "Core y estabilidad"),
  strength("Burpees", "3 x 5-8", "Ejercicio completo"),
];

const STRENGTH_INTERMEDIATE: &[ExerciseDescriptor] = &[
  strength("Flexiones diamante", "3 x 8-12", "Mayor dificultad en tríceps"),
  strength("Sentadillas con salto", "3 x 10-12", "Añade componente pliométrico"),
  strength("Mountain climbers", "3 x 20", "Cardio y core"),
  strength("Lunges", "3 x 12 c/u", "Trabajo unilateral de piernas"),
];

const STRENGTH_ADVANCED: &[ExerciseDescriptor] = &[
  strength("Flexiones con palmada", "3 x 6-10", "Potencia explosiva"),
  strength("Pistol squats", "3 x 5 c/u", "Fuerza unilateral avanzada"),
  strength("Handstand push-ups", "3 x 3-8", "Fuerza vertical avanzada"),
  strength("Single leg burpees", "3 x 6 c/u", "Coordinación y fuerza"),
];

const CARDIO_BEGINNER: &[ExerciseDescriptor] = &[
  cardio("Caminata rápida", "15-20 min", "Moderada"),
  cardio("Trote ligero", "10-15 min", "Moderada"),
  cardio("Jumping jacks", "3 x 30s", "Moderada"),
  cardio("Step ups", "3 x 45s", "Baja-Moderada"),
];

const CARDIO_INTERMEDIATE: &[ExerciseDescriptor] = &[
  cardio("Correr", "20-30 min", "Moderada-Alta"),
  cardio("HIIT básico", "15-20 min", "Alta"),
  cardio("Saltar cuerda", "10-15 min", "Alta"),
  cardio("Sprint intervals", "15-20 min", "Muy Alta"),
];

const CARDIO_ADVANCED: &[ExerciseDescriptor] = &[
  cardio("HIIT avanzado", "20-30 min", "Muy Alta"),
  cardio("Tabata", "16-20 min", "Máxima"),
  cardio("Sprint hills", "20-25 min", "Muy Alta"),
  cardio("Plyometrics", "15-20 min", "Alta"),
];

const FLEXIBILITY_BEGINNER: &[ExerciseDescriptor] = &[
  flexibility("Estiramiento de cuello", "30s x 3", "Estático"),
  flexibility("Estiramiento de brazos", "30s x 3", "Estático"),
  flexibility("Torsiones suaves", "30s x 3", "Dinámico"),
];

const FLEXIBILITY_INTERMEDIATE: &[ExerciseDescriptor] = &[
  flexibility("Yoga básico", "20-30 min", "Flujo"),
  flexibility("Estiramiento dinámico", "15-20 min", "Dinámico"),
  flexibility("Pilates", "30-45 min", "Control"),
];

const FLEXIBILITY_ADVANCED: &[ExerciseDescriptor] = &[
  flexibility("Yoga avanzado", "45-60 min", "Flujo avanzado"),
  flexibility("Contorsiones", "30-45 min", "Extremo"),
  flexibility("Flexibilidad extrema", "45-60 min", "Especializado"),
];

/// Exercises for a `(category, level)` pair, `None` when the pair is unknown
pub fn exercises_for(category: &str, level: &str) -> Option<&'static [ExerciseDescriptor]> {
  let entries = match (category, level) {
    ("strength", "beginner") => STRENGTH_BEGINNER,
    ("strength", "intermediate") => STRENGTH_INTERMEDIATE,
    ("strength", "advanced") => STRENGTH_ADVANCED,
    ("cardio", "beginner") => CARDIO_BEGINNER,
    ("cardio", "intermediate") => CARDIO_INTERMEDIATE,
    ("cardio", "advanced") => CARDIO_ADVANCED,
    ("flexibility", "beginner") => FLEXIBILITY_BEGINNER,
    ("flexibility", "intermediate") => FLEXIBILITY_INTERMEDIATE,
    ("flexibility", "advanced") => FLEXIBILITY_ADVANCED,
    _ => return None,
  };
  Some(entries)
}

/// ---------------------------------------------------------------------------
/// Calorie Reference Table
/// ---------------------------------------------------------------------------

/// Body mass the calorie table is calibrated against
pub const REFERENCE_BODY_MASS_KG: f64 = 70.0;

pub const INTENSITIES: [&str; 3] = ["Baja", "Moderada", "Alta"];

/// kcal per minute at 70 kg, indexed as `[Baja, Moderada, Alta]`
const CALORIES_PER_MINUTE: &[(&str, [f64; 3])] = &[
  ("Caminar", [3.0, 4.0, 5.0]),
  ("Trotar", [6.0, 8.0, 10.0]),
  ("Correr", [8.0, 11.0, 14.0]),
  ("Ciclismo", [4.0, 6.0, 9.0]),
  ("Natación", [6.0, 8.0, 11.0]),
  ("Yoga", [2.0, 3.0, 4.0]),
  ("Pesas", [3.0, 5.0, 7.0]),
];

/// Activities present in the calorie table, in display order
pub fn activities() -> impl Iterator<Item = &'static str> {
  CALORIES_PER_MINUTE.iter().map(|(name, _)| *name)
}

/// Rates for every intensity of one activity
pub fn activity_rates(activity: &str) -> Option<&'static [f64; 3]> {
  CALORIES_PER_MINUTE
    .iter()
    .find(|(name, _)| *name == activity)
    .map(|(_, rates)| rates)
}

pub fn intensity_index(intensity: &str) -> Option<usize> {
  INTENSITIES.iter().position(|i| *i == intensity)
}

/// ---------------------------------------------------------------------------
/// BMI Bands
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
  Underweight,
  Normal,
  Overweight,
  Obese,
}

impl BmiCategory {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Underweight => "underweight",
      Self::Normal => "normal",
      Self::Overweight => "overweight",
      Self::Obese => "obese",
    }
  }

  /// Label shown next to the result
  pub fn label(&self) -> &'static str {
    match self {
      Self::Underweight => "Bajo peso",
      Self::Normal => "Peso normal",
      Self::Overweight => "Sobrepeso",
      Self::Obese => "Obesidad",
    }
  }

  pub fn color(&self) -> &'static str {
    match self {
      Self::Underweight => "#3498db",
      Self::Normal => "#2ecc71",
      Self::Overweight => "#f39c12",
      Self::Obese => "#e74c3c",
    }
  }

  pub fn emoji(&self) -> &'static str {
    match self {
      Self::Underweight => "🔵",
      Self::Normal => "🟢",
      Self::Overweight => "🟡",
      Self::Obese => "🔴",
    }
  }
}

impl std::fmt::Display for BmiCategory {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// ---------------------------------------------------------------------------
/// Reading Resources
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Resource {
  pub title: &'static str,
  pub summary: &'static str,
  pub category: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResourceSection {
  pub name: &'static str,
  pub entries: &'static [Resource],
}

pub const RESOURCES: &[ResourceSection] = &[
  ResourceSection {
    name: "Artículos de Investigación",
    entries: &[
      Resource {
        title: "Effects of High-Intensity Interval Training vs Moderate-Intensity Training",
        summary: "Comparación de efectividad entre HIIT y entrenamiento moderado",
        category: "Cardio",
      },
      Resource {
        title: "The Role of Protein in Muscle Recovery and Growth",
        summary: "Importancia de la proteína en la recuperación muscular",
        category: "Nutrición",
      },
      Resource {
        title: "Sleep and Exercise Performance: A Systematic Review",
        summary: "Relación entre calidad del sueño y rendimiento deportivo",
        category: "Recuperación",
      },
    ],
  },
  ResourceSection {
    name: "Guías Nutricionales",
    entries: &[
      Resource {
        title: "Macronutrientes para Deportistas",
        summary: "Distribución óptima de carbohidratos, proteínas y grasas",
        category: "Nutrición básica",
      },
      Resource {
        title: "Hidratación en el Ejercicio",
        summary: "Estrategias de hidratación antes, durante y después del ejercicio",
        category: "Hidratación",
      },
      Resource {
        title: "Suplementación Deportiva Basada en Evidencia",
        summary: "Suplementos con respaldo científico para el rendimiento",
        category: "Suplementos",
      },
    ],
  },
  ResourceSection {
    name: "Técnicas de Entrenamiento",
    entries: &[
      Resource {
        title: "Periodización del Entrenamiento de Fuerza",
        summary: "Cómo estructurar el entrenamiento a largo plazo",
        category: "Planificación",
      },
      Resource {
        title: "Técnicas de Recuperación Activa",
        summary: "Métodos para acelerar la recuperación post-ejercicio",
        category: "Recuperación",
      },
      Resource {
        title: "Prevención de Lesiones en el Deporte",
        summary: "Estrategias para reducir el riesgo de lesiones",
        category: "Prevención",
      },
    ],
  },
];
