//! Repositorios en memoria para tests de controladores y rutas

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::models::{Auto, AutoRent, CommissionRule, RentThreshold};
use crate::repositories::{AutoRepository, CommissionRepository, RentalRepository};
use crate::utils::errors::{not_found_error, AppError, AppResult};

#[derive(Default)]
pub struct MemoryStore {
    autos: Mutex<BTreeMap<String, Auto>>,
    rents: Mutex<BTreeMap<String, AutoRent>>,
    thresholds: Mutex<HashMap<String, RentThreshold>>,
    commissions: Mutex<HashMap<String, Vec<CommissionRule>>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_auto(&self, id: &str, auto_type: &str, availability: bool) {
        self.autos
            .lock()
            .unwrap()
            .insert(id.to_string(), Auto::new(id, auto_type, availability));
    }

    pub fn add_rent(&self, rent: AutoRent) {
        self.rents.lock().unwrap().insert(rent.auto_id.clone(), rent);
    }

    pub fn set_threshold(&self, auto_type: &str, min: i32, max: i32) {
        self.thresholds.lock().unwrap().insert(
            auto_type.to_string(),
            RentThreshold {
                auto_type: auto_type.to_string(),
                min_threshold: min,
                max_threshold: max,
            },
        );
    }

    pub fn set_commissions(&self, auto_type: &str, rules: Vec<CommissionRule>) {
        self.commissions
            .lock()
            .unwrap()
            .insert(auto_type.to_string(), rules);
    }

    /// Simular un fallo de almacenamiento en las escrituras
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn auto(&self, id: &str) -> Option<Auto> {
        self.autos.lock().unwrap().get(id).cloned()
    }

    pub fn rent(&self, id: &str) -> Option<AutoRent> {
        self.rents.lock().unwrap().get(id).cloned()
    }

    fn check_writes(&self) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl AutoRepository for MemoryStore {
    async fn find_available_by_type(&self, auto_type: &str) -> AppResult<Vec<Auto>> {
        Ok(self
            .autos
            .lock()
            .unwrap()
            .values()
            .filter(|auto| auto.auto_type == auto_type && auto.availability)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, auto_id: &str) -> AppResult<Option<Auto>> {
        Ok(self.auto(auto_id))
    }
}

#[async_trait]
impl RentalRepository for MemoryStore {
    async fn find_by_auto(&self, auto_id: &str) -> AppResult<Option<AutoRent>> {
        Ok(self.rent(auto_id))
    }

    async fn find_threshold_by_type(&self, auto_type: &str) -> AppResult<Option<RentThreshold>> {
        Ok(self.thresholds.lock().unwrap().get(auto_type).cloned())
    }

    async fn bind(&self, rent: &AutoRent) -> AppResult<()> {
        self.check_writes()?;
        let mut autos = self.autos.lock().unwrap();
        let mut rents = self.rents.lock().unwrap();

        let auto = autos
            .get_mut(&rent.auto_id)
            .ok_or_else(|| not_found_error("Auto", &rent.auto_id))?;
        if rents.contains_key(&rent.auto_id) {
            return Err(AppError::AlreadyRented(rent.auto_id.clone()));
        }

        rents.insert(rent.auto_id.clone(), rent.clone());
        auto.availability = false;
        Ok(())
    }

    async fn release(&self, auto_id: &str) -> AppResult<()> {
        self.check_writes()?;
        let mut autos = self.autos.lock().unwrap();
        let mut rents = self.rents.lock().unwrap();

        let auto = autos
            .get_mut(auto_id)
            .ok_or_else(|| not_found_error("Auto", auto_id))?;
        if rents.remove(auto_id).is_none() {
            return Err(not_found_error("Rent for auto", auto_id));
        }

        auto.availability = true;
        Ok(())
    }
}

#[async_trait]
impl CommissionRepository for MemoryStore {
    async fn find_by_type(&self, auto_type: &str) -> AppResult<Vec<CommissionRule>> {
        Ok(self
            .commissions
            .lock()
            .unwrap()
            .get(auto_type)
            .cloned()
            .unwrap_or_default())
    }
}
