//! Prompt assembly for drafted outbound messages.

/// Delivery channels with their own formatting rules. Any other channel name
/// is passed through to the prompt without extra directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Email,
    Sms,
    Push,
    WhatsApp,
}

impl Channel {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Email" => Some(Channel::Email),
            "SMS" => Some(Channel::Sms),
            "Push" => Some(Channel::Push),
            "WhatsApp" => Some(Channel::WhatsApp),
            _ => None,
        }
    }

    fn directive(&self, brand: &str) -> String {
        match self {
            Channel::Email => format!(
                "Start the message with a greeting like \"Dear [Name],\" and end with a professional closing like \"Best regards,\nThe {} Team\". Keep the body to 2-3 short paragraphs. Do not include a subject line.",
                brand
            ),
            Channel::Sms => "The message must be very short, under 160 characters. Do not use greetings or closings.".to_string(),
            Channel::Push => "The message must be a short, actionable notification. Do not use greetings or closings.".to_string(),
            Channel::WhatsApp => "The message should be friendly and conversational, suitable for WhatsApp. Emojis are allowed. Do not use formal greetings or closings.".to_string(),
        }
    }
}

pub struct MessageBrief<'a> {
    pub recipient: &'a str,
    pub goal: &'a str,
    pub channel: &'a str,
    pub instructions: Option<&'a str>,
}

pub fn build_message_prompt(brief: &MessageBrief<'_>, brand: &str) -> String {
    let mut prompt = String::new();
    prompt.push_str(&format!(
        "You are a professional B2B communication assistant for \"{} CRM\", a marketplace connecting vendors with retailers. ",
        brand
    ));
    prompt.push_str("Your task is to generate a concise, professional, and friendly message.\n\n");
    prompt.push_str(&format!("Channel: {}\n", brief.channel));
    prompt.push_str(&format!("Recipient Type: {}\n", brief.recipient));
    prompt.push_str(&format!("Message Goal: {}\n", brief.goal));

    if let Some(extra) = brief.instructions.map(str::trim).filter(|s| !s.is_empty()) {
        prompt.push_str(&format!("Additional Instructions: {}\n", extra));
    }

    prompt.push_str("\nThe tone should be supportive and business-oriented.");

    if let Some(channel) = Channel::parse(brief.channel) {
        prompt.push_str("\n\n");
        prompt.push_str(&channel.directive(brand));
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief<'a>(channel: &'a str, instructions: Option<&'a str>) -> MessageBrief<'a> {
        MessageBrief {
            recipient: "Retailer",
            goal: "Welcome to the marketplace",
            channel,
            instructions,
        }
    }

    #[test]
    fn email_prompt_asks_for_greeting_and_signed_closing() {
        let prompt = build_message_prompt(&brief("Email", None), "Qawafel");
        assert!(prompt.contains("\"Qawafel CRM\""));
        assert!(prompt.contains("Dear [Name],"));
        assert!(prompt.contains("The Qawafel Team"));
        assert!(prompt.contains("2-3 short paragraphs"));
        assert!(!prompt.contains("160 characters"));
    }

    #[test]
    fn sms_prompt_caps_length() {
        let prompt = build_message_prompt(&brief("SMS", None), "Qawafel");
        assert!(prompt.contains("under 160 characters"));
        assert!(!prompt.contains("Dear [Name],"));
    }

    #[test]
    fn whatsapp_prompt_allows_informal_tone() {
        let prompt = build_message_prompt(&brief("WhatsApp", None), "Qawafel");
        assert!(prompt.contains("Emojis are allowed"));
    }

    #[test]
    fn embeds_recipient_goal_and_instructions() {
        let prompt = build_message_prompt(&brief("Push", Some("Mention the Eid discount")), "Qawafel");
        assert!(prompt.contains("Recipient Type: Retailer"));
        assert!(prompt.contains("Message Goal: Welcome to the marketplace"));
        assert!(prompt.contains("Additional Instructions: Mention the Eid discount"));
        assert!(prompt.contains("short, actionable notification"));
    }

    #[test]
    fn blank_instructions_are_left_out() {
        let prompt = build_message_prompt(&brief("Email", Some("   ")), "Qawafel");
        assert!(!prompt.contains("Additional Instructions"));
    }

    #[test]
    fn unknown_channel_gets_no_directive() {
        let prompt = build_message_prompt(&brief("Fax", None), "Qawafel");
        assert!(prompt.contains("Channel: Fax"));
        assert!(prompt.ends_with("business-oriented."));
    }
}
