// src/common/db_utils.rs

use std::fmt;

use validator::ValidationError;

use crate::common::error::AppError;

// Limite do Postgres para nomes (NAMEDATALEN - 1)
const MAX_IDENT_LEN: usize = 63;

/// Tabelas do próprio sistema. Os endpoints de processos dinâmicos nunca
/// criam, leem ou apagam nenhuma delas.
pub const RESERVED_TABLES: &[&str] = &[
    "users",
    "produtos",
    "entradas",
    "saidas",
    "pedidos",
    "itens_pedido",
    "vendas",
    "candidatos",
    "processos",
    "_sqlx_migrations",
];

/// Identificador SQL já validado (`[A-Za-z_][A-Za-z0-9_]*`, até 63 bytes,
/// normalizado para minúsculas). Só é construído via `parse`, então todo
/// nome que entra no texto de um comando passou pela allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlIdent(String);

impl SqlIdent {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if !is_valid_identifier(raw) {
            return Err(AppError::InvalidIdentifier(raw.to_string()));
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }

    /// Mesma regra de `parse`, recusando as tabelas do sistema.
    pub fn parse_table(raw: &str) -> Result<Self, AppError> {
        let ident = Self::parse(raw)?;
        if RESERVED_TABLES.contains(&ident.as_str()) {
            return Err(AppError::ReservedTable(ident.0));
        }
        Ok(ident)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Forma entre aspas duplas, a única usada ao montar SQL.
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl fmt::Display for SqlIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn is_valid_identifier(raw: &str) -> bool {
    let mut chars = raw.chars();
    let valid_start = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    valid_start
        && raw.len() <= MAX_IDENT_LEN
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Remove tudo que não for `[A-Za-z0-9_]` (regra do endpoint de exclusão).
pub fn strip_identifier(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// O front manda o título do processo com espaços; a tabela usa '_'.
pub fn table_name_from_title(raw: &str) -> String {
    raw.replace(' ', "_")
}

// ---
// Validações customizadas (validator)
// ---

pub fn validate_identifier(value: &str) -> Result<(), ValidationError> {
    if is_valid_identifier(value) {
        return Ok(());
    }
    let mut err = ValidationError::new("identifier");
    err.message = Some("Use apenas letras, números e '_' (sem começar por número).".into());
    Err(err)
}

pub fn validate_column_list(columns: &[String]) -> Result<(), ValidationError> {
    if columns.is_empty() {
        let mut err = ValidationError::new("length");
        err.message = Some("Informe ao menos uma coluna.".into());
        return Err(err);
    }

    let mut seen = Vec::with_capacity(columns.len());
    for column in columns {
        validate_identifier(column)?;

        let lower = column.to_ascii_lowercase();
        if lower == "id" {
            let mut err = ValidationError::new("reserved");
            err.message = Some("A coluna 'id' é criada automaticamente.".into());
            return Err(err);
        }
        if seen.contains(&lower) {
            let mut err = ValidationError::new("duplicate");
            err.message = Some("Colunas repetidas.".into());
            return Err(err);
        }
        seen.push(lower);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers_and_lowercases_them() {
        let ident = SqlIdent::parse("Recrutamento_2024").unwrap();
        assert_eq!(ident.as_str(), "recrutamento_2024");
        assert_eq!(ident.quoted(), "\"recrutamento_2024\"");
    }

    #[test]
    fn rejects_injection_shaped_names() {
        for raw in [
            "x; DROP TABLE users",
            "a\"b",
            "1tabela",
            "",
            "nome com espaco",
            "tabela--",
        ] {
            assert!(
                matches!(SqlIdent::parse(raw), Err(AppError::InvalidIdentifier(_))),
                "{raw} deveria ser recusado"
            );
        }
        assert!(SqlIdent::parse(&"a".repeat(64)).is_err());
    }

    #[test]
    fn core_tables_are_reserved() {
        assert!(matches!(
            SqlIdent::parse_table("Produtos"),
            Err(AppError::ReservedTable(name)) if name == "produtos"
        ));
        assert!(SqlIdent::parse_table("onboarding").is_ok());
    }

    #[test]
    fn strip_keeps_only_word_characters() {
        assert_eq!(strip_identifier("proc; drop table x--"), "procdroptablex");
        assert_eq!(table_name_from_title("Processo Seletivo"), "Processo_Seletivo");
    }

    #[test]
    fn column_list_rules() {
        assert!(validate_column_list(&["nome".into(), "etapa".into()]).is_ok());
        assert!(validate_column_list(&[]).is_err());
        assert!(validate_column_list(&["id".into()]).is_err());
        assert!(validate_column_list(&["nome".into(), "NOME".into()]).is_err());
        assert!(validate_column_list(&["nome text".into()]).is_err());
    }
}
