use thiserror::Error;

/// Visual theme of a step. Only picks colors and an icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Emergency,
    Medical,
    Support,
    Care,
    Coordination,
    Psychology,
    Therapy,
    Documentation,
    Family,
    External,
}

impl Category {
    pub fn theme_class(self) -> &'static str {
        match self {
            Category::Emergency => "theme-emergency",
            Category::Medical => "theme-medical",
            Category::Support => "theme-support",
            Category::Care => "theme-care",
            Category::Coordination => "theme-coordination",
            Category::Psychology => "theme-psychology",
            Category::Therapy => "theme-therapy",
            Category::Documentation => "theme-documentation",
            Category::Family => "theme-family",
            Category::External => "theme-external",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StepDescriptor {
    pub index: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub details: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatBadge {
    pub label: &'static str,
    pub value: &'static str,
    pub glyph: &'static str,
}

/// A role from the professionals grid, with the steps it intervenes in.
#[derive(Clone, Debug, PartialEq)]
pub struct Professional {
    pub role: &'static str,
    pub focus: &'static str,
    pub category: Category,
    pub steps: &'static [usize],
}

impl Professional {
    pub fn intervenes_in(&self, step: usize) -> bool {
        self.steps.contains(&step)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("step catalog is empty")]
    Empty,
    #[error("step at position {position} declares index {declared}")]
    IndexMismatch { position: usize, declared: usize },
    #[error("professional '{role}' references step {step}, catalog has {len} steps")]
    UnknownStep {
        role: &'static str,
        step: usize,
        len: usize,
    },
}

pub const STEPS: &[StepDescriptor] = &[
    StepDescriptor {
        index: 0,
        title: "Evento en Salud",
        description: "Notificación inmediatamente a profesional de enfermería",
        category: Category::Emergency,
        details: &[],
    },
    StepDescriptor {
        index: 1,
        title: "Valoración de la PCD",
        description: "Valoración de la PCD a cargo de profesional de enfermería",
        category: Category::Medical,
        details: &[],
    },
    StepDescriptor {
        index: 2,
        title: "Solicitud de Apoyo",
        description: "Solicitud de apoyo al equipo profesional de emergencias",
        category: Category::Support,
        details: &[],
    },
    StepDescriptor {
        index: 3,
        title: "Atención Inicial",
        description: "Atención inicial a cargo de profesional de enfermería y programas de atención",
        category: Category::Care,
        details: &[],
    },
    StepDescriptor {
        index: 4,
        title: "Activación Línea 123",
        description: "Activación de la línea de emergencias de la Secretaría Distrital de Salud 123",
        category: Category::Coordination,
        details: &[],
    },
    StepDescriptor {
        index: 5,
        title: "Alteración de la Conducta",
        description: "Profesional de Psicología",
        category: Category::Psychology,
        details: &[],
    },
    StepDescriptor {
        index: 6,
        title: "Lesiones Corporales",
        description: "Profesional de Fisioterapia",
        category: Category::Therapy,
        details: &[],
    },
    StepDescriptor {
        index: 7,
        title: "Datos de Identificación",
        description: "Diagnóstico - Profesional competente en salud",
        category: Category::Documentation,
        details: &[],
    },
    StepDescriptor {
        index: 8,
        title: "Referente Familiar",
        description: "Solicitar referente familiar - informar sobre el evento. Traslado de la PCD al servicio de urgencias y direccionamiento del médico registrador de urgencias",
        category: Category::Family,
        details: &[
            "Solicitar referente familiar",
            "Informar sobre el evento",
            "Traslado de la PCD al servicio de urgencias",
            "Direccionamiento del médico registrador de urgencias",
        ],
    },
    StepDescriptor {
        index: 9,
        title: "Atención Externa Grupo 6",
        description: "Notificación de Evento en salud - Referente técnico en urgencias para Atención Externa Integrada",
        category: Category::External,
        details: &[
            "Notificación de Evento en salud",
            "Referente técnico en urgencias",
        ],
    },
];

pub const STATS: &[StatBadge] = &[
    StatBadge { label: "RESPUESTA", value: "INMEDIATA", glyph: "⏱" },
    StatBadge { label: "ATENCIÓN", value: "24/7", glyph: "🛡" },
    StatBadge { label: "CUIDADO", value: "INTEGRAL", glyph: "♥" },
    StatBadge { label: "LÍNEA", value: "123", glyph: "✔" },
];

pub const PROFESSIONALS: &[Professional] = &[
    Professional {
        role: "Enfermería",
        focus: "Notificación, valoración y atención inicial de la PCD",
        category: Category::Medical,
        steps: &[0, 1, 3],
    },
    Professional {
        role: "Equipo de Emergencias",
        focus: "Apoyo profesional y activación de la línea 123",
        category: Category::Support,
        steps: &[2, 4],
    },
    Professional {
        role: "Psicología",
        focus: "Alteración de la conducta",
        category: Category::Psychology,
        steps: &[5],
    },
    Professional {
        role: "Fisioterapia",
        focus: "Lesiones corporales",
        category: Category::Therapy,
        steps: &[6],
    },
    Professional {
        role: "Profesional competente en salud",
        focus: "Diagnóstico y datos de identificación",
        category: Category::Documentation,
        steps: &[7],
    },
    Professional {
        role: "Médico registrador de urgencias",
        focus: "Recepción de la PCD en el servicio de urgencias",
        category: Category::Family,
        steps: &[8],
    },
    Professional {
        role: "Referente técnico en urgencias",
        focus: "Atención Externa Integrada",
        category: Category::External,
        steps: &[9],
    },
];

/// Checks the compiled-in content once at startup.
pub fn validate(steps: &[StepDescriptor], professionals: &[Professional]) -> Result<(), CatalogError> {
    if steps.is_empty() {
        return Err(CatalogError::Empty);
    }
    for (position, step) in steps.iter().enumerate() {
        if step.index != position {
            return Err(CatalogError::IndexMismatch {
                position,
                declared: step.index,
            });
        }
    }
    for professional in professionals {
        if let Some(&step) = professional.steps.iter().find(|&&s| s >= steps.len()) {
            return Err(CatalogError::UnknownStep {
                role: professional.role,
                step,
                len: steps.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_catalog_is_valid() {
        assert_eq!(validate(STEPS, PROFESSIONALS), Ok(()));
        assert_eq!(STEPS.len(), 10);
        assert_eq!(STATS.len(), 4);
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(validate(&[], PROFESSIONALS), Err(CatalogError::Empty));
    }

    #[test]
    fn index_must_match_position() {
        let steps = [STEPS[1].clone()];
        assert_eq!(
            validate(&steps, &[]),
            Err(CatalogError::IndexMismatch { position: 0, declared: 1 })
        );
    }

    #[test]
    fn professional_step_must_exist() {
        let steps = &STEPS[..3];
        let err = validate(steps, PROFESSIONALS).unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownStep { role: "Enfermería", step: 3, len: 3 }
        );
    }

    #[test]
    fn every_step_has_a_professional() {
        for step in STEPS {
            assert!(
                PROFESSIONALS.iter().any(|p| p.intervenes_in(step.index)),
                "no professional for step {}",
                step.index
            );
        }
    }

    #[test]
    fn theme_classes_are_distinct() {
        let mut classes: Vec<_> = STEPS.iter().map(|s| s.category.theme_class()).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), STEPS.len());
    }
}
