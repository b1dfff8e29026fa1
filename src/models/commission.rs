//! Modelo de Commission
//!
//! Reglas de precio por categoría de vehículo. La columna `type` se guarda
//! como texto y se convierte a [`CommissionKind`] al leerla.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// Tipo de comisión
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommissionKind {
    /// Tarifa plana por día
    Daily,
    /// Recargo porcentual sobre la tarifa diaria en sábado y domingo
    Weekend,
    /// Cargo plano por contrato
    Agreement,
    /// Porcentaje sobre los días no usados en una devolución anticipada
    Penalty,
    /// Seguro plano, informado aparte del total
    Insurance,
}

impl CommissionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommissionKind::Daily => "daily",
            CommissionKind::Weekend => "weekend",
            CommissionKind::Agreement => "agreement",
            CommissionKind::Penalty => "penalty",
            CommissionKind::Insurance => "insurance",
        }
    }
}

impl fmt::Display for CommissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown commission type '{0}'")]
pub struct UnknownCommissionKind(pub String);

impl FromStr for CommissionKind {
    type Err = UnknownCommissionKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(CommissionKind::Daily),
            "weekend" => Ok(CommissionKind::Weekend),
            "agreement" => Ok(CommissionKind::Agreement),
            "penalty" => Ok(CommissionKind::Penalty),
            "insurance" => Ok(CommissionKind::Insurance),
            _ => Err(UnknownCommissionKind(value.to_string())),
        }
    }
}

/// Fila de la tabla commission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Commission {
    pub auto_type: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub value: i32,
    pub min_threshold: i32,
}

impl Commission {
    /// Convertir la fila en una regla tipada
    pub fn to_rule(&self) -> Result<CommissionRule, UnknownCommissionKind> {
        Ok(CommissionRule {
            kind: self.kind.parse()?,
            value: i64::from(self.value),
            min_threshold: i64::from(self.min_threshold),
        })
    }
}

/// Regla de comisión tal como la consume el motor de liquidación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommissionRule {
    pub kind: CommissionKind,
    pub value: i64,
    /// Solo significativo para `Penalty`
    pub min_threshold: i64,
}

impl CommissionRule {
    pub fn new(kind: CommissionKind, value: i64) -> Self {
        Self {
            kind,
            value,
            min_threshold: 0,
        }
    }

    pub fn penalty(percent: i64, min_threshold: i64) -> Self {
        Self {
            kind: CommissionKind::Penalty,
            value: percent,
            min_threshold,
        }
    }
}
