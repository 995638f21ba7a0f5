use std::fmt;

use serde::Serialize;

/// One of the twelve sections every spec document must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CanonicalSection {
    ContextAndGoal,
    FunctionalRequirements,
    ContractsAndInterfaces,
    FlowsAndStates,
    Data,
    Nfrs,
    Guardrails,
    AcceptanceCriteria,
    Tests,
    Migration,
    OperationalNotes,
    Open,
}

impl CanonicalSection {
    /// All required sections in template order.
    pub const ALL: [Self; 12] = [
        Self::ContextAndGoal,
        Self::FunctionalRequirements,
        Self::ContractsAndInterfaces,
        Self::FlowsAndStates,
        Self::Data,
        Self::Nfrs,
        Self::Guardrails,
        Self::AcceptanceCriteria,
        Self::Tests,
        Self::Migration,
        Self::OperationalNotes,
        Self::Open,
    ];

    /// The heading text used in spec documents.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ContextAndGoal => "Contexto e Objetivo",
            Self::FunctionalRequirements => "Requisitos Funcionais",
            Self::ContractsAndInterfaces => "Contratos e Interfaces",
            Self::FlowsAndStates => "Fluxos e Estados",
            Self::Data => "Dados",
            Self::Nfrs => "NFRs",
            Self::Guardrails => "Guardrails",
            Self::AcceptanceCriteria => "Critérios de Aceite",
            Self::Tests => "Testes",
            Self::Migration => "Migração",
            Self::OperationalNotes => "Observações Operacionais",
            Self::Open => "Abertos",
        }
    }
}

impl fmt::Display for CanonicalSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A section title after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionName {
    Canonical(CanonicalSection),
    /// Kept verbatim; never satisfies a required-section check.
    Other(String),
}

impl SectionName {
    #[must_use]
    pub const fn canonical(&self) -> Option<CanonicalSection> {
        match self {
            Self::Canonical(section) => Some(*section),
            Self::Other(_) => None,
        }
    }
}

struct SectionRule {
    matches: fn(&str) -> bool,
    section: CanonicalSection,
}

const ALIASES: [(&str, CanonicalSection); 6] = [
    ("Abertos / Fora de Escopo", CanonicalSection::Open),
    ("Abertos/Fora de Escopo", CanonicalSection::Open),
    ("Migração / Rollback", CanonicalSection::Migration),
    ("Migração/Rollback", CanonicalSection::Migration),
    ("NFRs (Não Funcionais)", CanonicalSection::Nfrs),
    ("NFRs", CanonicalSection::Nfrs),
];

// Evaluated top to bottom; the first matching rule wins.
const KEYWORD_RULES: [SectionRule; 12] = [
    SectionRule {
        matches: |name| name.contains("Abertos") || name.contains("Fora de Escopo"),
        section: CanonicalSection::Open,
    },
    SectionRule {
        matches: |name| name.contains("Migração") || name.contains("Rollback"),
        section: CanonicalSection::Migration,
    },
    SectionRule {
        matches: |name| name.starts_with("NFRs") || name.contains("Não Funcionais"),
        section: CanonicalSection::Nfrs,
    },
    SectionRule {
        matches: |name| name.contains("Contexto") && name.contains("Objetivo"),
        section: CanonicalSection::ContextAndGoal,
    },
    SectionRule {
        matches: |name| name.contains("Requisitos Funcionais"),
        section: CanonicalSection::FunctionalRequirements,
    },
    SectionRule {
        matches: |name| name.contains("Contratos") && name.contains("Interfaces"),
        section: CanonicalSection::ContractsAndInterfaces,
    },
    SectionRule {
        matches: |name| name.contains("Fluxos") && name.contains("Estados"),
        section: CanonicalSection::FlowsAndStates,
    },
    SectionRule {
        matches: |name| name == "Dados",
        section: CanonicalSection::Data,
    },
    SectionRule {
        matches: |name| name.contains("Guardrails"),
        section: CanonicalSection::Guardrails,
    },
    SectionRule {
        matches: |name| name.contains("Critérios") && name.contains("Aceite"),
        section: CanonicalSection::AcceptanceCriteria,
    },
    SectionRule {
        matches: |name| name == "Testes",
        section: CanonicalSection::Tests,
    },
    SectionRule {
        matches: |name| name.contains("Observações Operacionais"),
        section: CanonicalSection::OperationalNotes,
    },
];

/// Maps a section title to its canonical name.
///
/// The alias table is consulted first, then the keyword rules in order.
/// Titles matching nothing are returned as [`SectionName::Other`].
#[must_use]
pub fn normalize_section_name(title: &str) -> SectionName {
    let title = title.trim();

    let alias = ALIASES
        .iter()
        .find(|(alias, _)| *alias == title)
        .map(|(_, section)| *section);
    let section = alias.or_else(|| {
        KEYWORD_RULES
            .iter()
            .find(|rule| (rule.matches)(title))
            .map(|rule| rule.section)
    });

    section.map_or_else(
        || SectionName::Other(title.to_string()),
        SectionName::Canonical,
    )
}

#[cfg(test)]
#[path = "section_tests.rs"]
mod tests;
