//! Motor de liquidación
//!
//! Calcula el importe adeudado por un alquiler a partir de su ventana de fechas,
//! las reglas de comisión de la categoría y una fecha de referencia. Es una
//! función pura: no hace I/O y nunca falla; las reglas ausentes aportan cero.
//!
//! Toda la aritmética porcentual usa división entera truncada.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

use crate::models::{CommissionKind, CommissionRule, RentalWindow};

/// Modo de cálculo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlementMode {
    /// Liquidación final al devolver el vehículo; aplica la penalización
    Checkout,
    /// Proyección de solo lectura del saldo actual
    Estimate,
}

/// Resultado de una liquidación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settlement {
    pub total: i64,
    /// Seguro plano; nunca se suma a `total`
    pub insurance: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PenaltyRule {
    pub percent: i64,
    pub min_threshold: i64,
}

/// Reglas de una categoría resueltas en una sola pasada
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommissionSchedule {
    pub daily: Option<i64>,
    /// Porcentaje de recargo de fin de semana
    pub weekend: Option<i64>,
    pub agreement: i64,
    pub insurance: i64,
    pub penalty: Option<PenaltyRule>,
}

/// Reparto de un tramo de días entre laborables y fin de semana
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DaySplit {
    pub business: i64,
    pub weekend: i64,
}

impl DaySplit {
    /// Reparte `days` días consecutivos empezando en `from`.
    ///
    /// Cada semana completa aporta dos días de fin de semana; solo se
    /// recorren los hasta seis días sobrantes, que empiezan en el mismo
    /// día de la semana que `from`.
    pub fn walk(from: NaiveDate, days: i64) -> Self {
        if days <= 0 {
            return Self::default();
        }

        let full_weeks = days / 7;
        let mut split = DaySplit {
            business: full_weeks * 5,
            weekend: full_weeks * 2,
        };

        let mut day = from.weekday();
        for _ in 0..days % 7 {
            if is_weekend(day) {
                split.weekend += 1;
            } else {
                split.business += 1;
            }
            day = day.succ();
        }
        split
    }

    pub fn total(&self) -> i64 {
        self.business + self.weekend
    }
}

fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

/// Días facturables entre `start` y `reference`, ambos incluidos
pub fn complete_days(start: NaiveDate, reference: NaiveDate) -> i64 {
    (reference - start).num_days() + 1
}

impl CommissionSchedule {
    /// Una regla posterior del mismo tipo reemplaza a la anterior
    pub fn from_rules(rules: &[CommissionRule]) -> Self {
        rules.iter().fold(Self::default(), |mut schedule, rule| {
            match rule.kind {
                CommissionKind::Daily => schedule.daily = Some(rule.value),
                CommissionKind::Weekend => schedule.weekend = Some(rule.value),
                CommissionKind::Agreement => schedule.agreement = rule.value,
                CommissionKind::Insurance => schedule.insurance = rule.value,
                CommissionKind::Penalty => {
                    schedule.penalty = Some(PenaltyRule {
                        percent: rule.value,
                        min_threshold: rule.min_threshold,
                    })
                }
            }
            schedule
        })
    }

    /// Coste diario más recargo de fin de semana para `days` días desde `from`.
    /// Sin tarifa diaria no hay término por días.
    pub fn span_cost(&self, from: NaiveDate, days: i64) -> i64 {
        let Some(daily) = self.daily else {
            return 0;
        };
        if days <= 0 {
            return 0;
        }

        let split = DaySplit::walk(from, days);
        let surcharge = self
            .weekend
            .map(|percent| split.weekend * daily * percent / 100)
            .unwrap_or(0);

        split.total() * daily + surcharge
    }

    /// En modo `Checkout` se espera `reference >= window.start`; si no se cumple
    /// el primer día se factura igualmente.
    pub fn settle(
        &self,
        window: RentalWindow,
        reference: NaiveDate,
        mode: SettlementMode,
    ) -> Settlement {
        let days = complete_days(window.start, reference).max(1);

        let usage = match (mode, self.penalty) {
            (SettlementMode::Checkout, Some(penalty)) if penalty.min_threshold != 0 => {
                self.checkout_with_penalty(window, reference, days, penalty)
            }
            _ => self.span_cost(window.start, days),
        };

        Settlement {
            total: usage + self.agreement,
            insurance: self.insurance,
        }
    }

    fn checkout_with_penalty(
        &self,
        window: RentalWindow,
        reference: NaiveDate,
        days: i64,
        penalty: PenaltyRule,
    ) -> i64 {
        let threshold = penalty.min_threshold;

        // Umbral mínimo no alcanzado: se factura la ventana completa del umbral
        if days < threshold {
            let billed = self.span_cost(window.start, threshold);
            let unused = window
                .start
                .checked_add_signed(Duration::days(threshold))
                .map(|unused_from| {
                    let unused_days = (window.committed_end - unused_from).num_days() + 1;
                    self.span_cost(unused_from, unused_days)
                })
                .unwrap_or(0);
            return billed + unused * penalty.percent / 100;
        }

        let billed = self.span_cost(window.start, days);
        if reference >= window.committed_end {
            return billed;
        }

        let leftover_days = (window.committed_end - reference).num_days();
        let leftover = self.span_cost(reference + Duration::days(1), leftover_days);
        billed + leftover * penalty.percent / 100
    }
}

/// Liquidar un alquiler con las reglas tal como vienen del repositorio
pub fn settle(
    window: RentalWindow,
    rules: &[CommissionRule],
    reference: NaiveDate,
    mode: SettlementMode,
) -> Settlement {
    CommissionSchedule::from_rules(rules).settle(window, reference, mode)
}
