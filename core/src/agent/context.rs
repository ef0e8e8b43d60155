use crate::agent::AgentProfile;
use crate::traits::{ChatMessage, ToolSpec};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

pub const SYSTEM_PERSONA: &str = "Eres un asistente turístico experto especializado en Huaraz, Perú.

Tu objetivo es:
1. Proporcionar información detallada sobre atracciones turísticas
2. Recomendar rutas y actividades según el perfil del turista
3. Dar consejos sobre alojamiento, gastronomía y transporte
4. Considerar el clima, temporada y nivel de actividad física
5. Ofrecer recomendaciones personalizadas

Información sobre Huaraz:
- Ubicación: Ancash, Perú a 3,052 metros sobre el nivel del mar
- Clima: Templado, frío en las noches, lluvias de noviembre a marzo
- Atracciones principales: Laguna Parón, Laguna Llanganuco, Nevado Pastoruri, Laguna 69
- Mejor época: Mayo a octubre (estación seca)

Siempre:
- Responde en español de manera amable y profesional
- Proporciona información práctica y útil
- Sugiere alternativas según el presupuesto y tiempo
- Advierte sobre riesgos de altitud (mal de montaña)
- Recomienda artículos esenciales para llevar";

/// Traveller preferences saved into the conversation before chatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserContext {
    /// `budget`, `mid_range` or `luxury`.
    pub budget: Option<String>,
    pub fitness_level: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub notes: Option<String>,
}

impl UserContext {
    pub fn is_empty(&self) -> bool {
        self.budget.is_none()
            && self.fitness_level.is_none()
            && self.interests.is_empty()
            && self.notes.is_none()
    }
}

impl fmt::Display for UserContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = Vec::new();
        if let Some(budget) = &self.budget {
            fields.push(format!("presupuesto: {}", budget));
        }
        if let Some(level) = &self.fitness_level {
            fields.push(format!("nivel físico: {}", level));
        }
        if !self.interests.is_empty() {
            fields.push(format!("intereses: {}", self.interests.join(", ")));
        }
        if let Some(notes) = &self.notes {
            fields.push(format!("notas: {}", notes));
        }
        f.write_str(&fields.join("; "))
    }
}

/// Assembles the system prompt and the message list for one turn.
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    pub profile: AgentProfile,
    pub tool_specs: Vec<ToolSpec>,
    /// Describe the `<tool_call>` text protocol for models without native
    /// tool calling.
    pub inline_tool_protocol: bool,
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: AgentProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_tool_specs(mut self, tool_specs: Vec<ToolSpec>) -> Self {
        self.tool_specs = tool_specs;
        self
    }

    pub fn with_inline_tool_protocol(mut self, enabled: bool) -> Self {
        self.inline_tool_protocol = enabled;
        self
    }

    pub fn build_system_prompt(&self) -> String {
        let mut parts = vec![SYSTEM_PERSONA.to_string()];

        if let Some(note) = self.profile.prompt_note() {
            parts.push(format!("## Perfil del viajero\n\n{}", note));
        }

        if self.inline_tool_protocol && !self.tool_specs.is_empty() {
            parts.push(self.get_tool_instructions());
        }

        parts.push(self.get_runtime_context());

        parts.join("\n\n---\n\n")
    }

    fn get_tool_instructions(&self) -> String {
        let mut instructions = String::new();
        instructions.push_str("## Uso de herramientas\n\n");
        instructions
            .push_str("Para usar una herramienta, escribe un objeto JSON dentro de etiquetas <tool_call>:\n\n");
        instructions.push_str(
            "<tool_call>\n{\"name\": \"get_attraction_details\", \"arguments\": {\"attraction_name\": \"Laguna 69\"}}\n</tool_call>\n\n",
        );
        instructions.push_str(
            "Los resultados llegan en etiquetas <tool_result>. Continúa hasta poder dar una respuesta final.\n\n",
        );
        instructions.push_str("### Herramientas disponibles\n\n");

        for tool in &self.tool_specs {
            let _ = writeln!(
                instructions,
                "**{}**: {}\nParámetros: `{}`\n",
                tool.name, tool.description, tool.parameters_schema
            );
        }

        instructions
    }

    fn get_runtime_context(&self) -> String {
        let today = chrono::Local::now().format("%Y-%m-%d");
        format!("## Contexto\n\nFecha actual: {}", today)
    }

    pub fn build_messages(&self, history: Vec<ChatMessage>, current_message: &str) -> Vec<ChatMessage> {
        let mut messages = vec![ChatMessage::system(self.build_system_prompt())];
        messages.extend(history);
        messages.push(ChatMessage::user(current_message));
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spec() -> ToolSpec {
        ToolSpec {
            name: "get_altitude_advice".into(),
            description: "Obtener consejos para evitar el mal de altura.".into(),
            parameters_schema: json!({"type": "object", "properties": {}}),
        }
    }

    #[test]
    fn persona_comes_first() {
        let prompt = ContextBuilder::new().build_system_prompt();
        assert!(prompt.starts_with("Eres un asistente turístico experto especializado en Huaraz"));
        assert!(prompt.contains("Fecha actual:"));
        assert!(!prompt.contains("Perfil del viajero"));
    }

    #[test]
    fn tool_protocol_only_when_inline() {
        let native = ContextBuilder::new().with_tool_specs(vec![spec()]);
        assert!(!native.build_system_prompt().contains("<tool_call>"));

        let inline = native.with_inline_tool_protocol(true);
        let prompt = inline.build_system_prompt();
        assert!(prompt.contains("<tool_call>"));
        assert!(prompt.contains("**get_altitude_advice**"));
    }

    #[test]
    fn budget_profile_adds_note() {
        let prompt = ContextBuilder::new()
            .with_profile(AgentProfile::Budget)
            .build_system_prompt();
        assert!(prompt.contains("presupuesto ajustado"));
    }

    #[test]
    fn user_context_display() {
        let context = UserContext {
            budget: Some("mid_range".into()),
            fitness_level: Some("medio".into()),
            interests: vec!["naturaleza".into(), "cultura".into()],
            notes: None,
        };
        assert_eq!(
            context.to_string(),
            "presupuesto: mid_range; nivel físico: medio; intereses: naturaleza, cultura"
        );
        assert!(UserContext::default().is_empty());
    }

    #[test]
    fn messages_wrap_history() {
        let history = vec![ChatMessage::user("hola"), ChatMessage::assistant("¡Hola!")];
        let messages = ContextBuilder::new().build_messages(history, "¿Qué llevo?");

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].content, "hola");
        assert_eq!(messages[3].content, "¿Qué llevo?");
    }
}
