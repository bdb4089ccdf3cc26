//! Lista de candidatos em memória usada pelas rotas `/api/rh/candidatos`.
//!
//! É um rascunho: não persiste, some a cada reinício e NÃO é sincronizada com
//! a tabela `candidatos`. Os ids são `posição + 1` e nunca são reaproveitados,
//! já que a lista não tem remoção.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::recruitment::ScratchCandidate;

#[derive(Clone, Default)]
pub struct CandidateScratchList {
    inner: Arc<RwLock<Vec<ScratchCandidate>>>,
}

impl CandidateScratchList {
    pub async fn add(
        &self,
        nome: Option<String>,
        funcao: Option<String>,
        status: Option<String>,
    ) -> ScratchCandidate {
        let mut candidates = self.inner.write().await;
        let candidate = ScratchCandidate {
            id: candidates.len() as i32 + 1,
            nome,
            funcao,
            status,
            ativo: Some(true),
        };
        candidates.push(candidate.clone());
        info!("Candidato {} adicionado à lista em memória", candidate.id);
        candidate
    }

    pub async fn list(&self) -> Vec<ScratchCandidate> {
        self.inner.read().await.clone()
    }

    pub async fn set_status(&self, id: i32, status: Option<String>) -> Option<ScratchCandidate> {
        self.update(id, |candidate| candidate.status = status).await
    }

    pub async fn set_active(&self, id: i32, ativo: Option<bool>) -> Option<ScratchCandidate> {
        self.update(id, |candidate| candidate.ativo = ativo).await
    }

    async fn update<F>(&self, id: i32, apply: F) -> Option<ScratchCandidate>
    where
        F: FnOnce(&mut ScratchCandidate),
    {
        let mut candidates = self.inner.write().await;
        let candidate = candidates.iter_mut().find(|c| c.id == id)?;
        apply(candidate);
        debug!("Candidato {} atualizado na lista em memória", id);
        Some(candidate.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_follow_insertion_order() {
        let list = CandidateScratchList::default();
        let first = list.add(Some("Ana".into()), Some("QA".into()), None).await;
        let second = list.add(Some("Bruno".into()), None, Some("novo".into())).await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.ativo, Some(true));
        assert_eq!(list.list().await.len(), 2);
    }

    #[tokio::test]
    async fn updates_only_touch_existing_candidates() {
        let list = CandidateScratchList::default();
        list.add(Some("Ana".into()), None, None).await;

        let updated = list.set_status(1, Some("aprovado".into())).await.unwrap();
        assert_eq!(updated.status.as_deref(), Some("aprovado"));

        let updated = list.set_active(1, Some(false)).await.unwrap();
        assert_eq!(updated.ativo, Some(false));

        assert!(list.set_status(99, Some("x".into())).await.is_none());
        assert!(list.set_active(99, Some(true)).await.is_none());
    }

    #[tokio::test]
    async fn clones_share_the_same_list() {
        let list = CandidateScratchList::default();
        let handle = list.clone();
        handle.add(Some("Carla".into()), None, None).await;
        assert_eq!(list.list().await.len(), 1);
    }
}
