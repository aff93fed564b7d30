use serde::{Deserialize, Serialize};

/// Delay before redirecting after a successful submission.
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 1500;

fn default_redirect_delay_ms() -> u64 {
    DEFAULT_REDIRECT_DELAY_MS
}

/// Where leads go and where visitors land afterwards.
///
/// Both URLs are treated as opaque strings. Nothing here is validated; a
/// bad webhook URL surfaces as a submission error at submit time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeadCaptureConfig {
    #[serde(default)]
    pub webhook_url: String,
    #[serde(default)]
    pub redirect_url: String,
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,
}

impl Default for LeadCaptureConfig {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            redirect_url: String::new(),
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
        }
    }
}

/// Every visitor-facing string the dialog renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LeadCopy {
    pub title: String,
    pub description: String,
    pub close_label: String,
    pub name_label: String,
    pub name_placeholder: String,
    pub email_label: String,
    pub email_placeholder: String,
    pub phone_label: String,
    pub phone_placeholder: String,
    pub submit_label: String,
    pub submitting_label: String,
    pub success_title: String,
    pub success_message: String,
    pub error_title: String,
    pub validation_message: String,
    pub rejected_message: String,
    pub fallback_message: String,
}

impl Default for LeadCopy {
    fn default() -> Self {
        Self {
            title: "Acesse o Grupo Exclusivo".into(),
            description:
                "Preencha seus dados para ter acesso ao Copy Cash e copiar as minhas operações"
                    .into(),
            close_label: "Fechar".into(),
            name_label: "Nome".into(),
            name_placeholder: "Seu nome completo".into(),
            email_label: "Email".into(),
            email_placeholder: "Seu melhor email".into(),
            phone_label: "Telefone".into(),
            phone_placeholder: "Seu telefone com DDD".into(),
            submit_label: "ACESSAR AGORA".into(),
            submitting_label: "Processando...".into(),
            success_title: "Sucesso!".into(),
            success_message: "Seus dados foram enviados com sucesso.".into(),
            error_title: "Erro".into(),
            validation_message: "Por favor, preencha todos os campos".into(),
            rejected_message: "Falha ao enviar dados para o webhook".into(),
            fallback_message:
                "Ocorreu um erro ao processar seu cadastro. Por favor, tente novamente.".into(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub lead_capture: LeadCaptureConfig,
    #[serde(default)]
    pub copy: LeadCopy,
}
