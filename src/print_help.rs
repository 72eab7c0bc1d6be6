use colored::Colorize;

pub fn print_help() {
    println!("{:━^60}", " MadAI chat relay ".yellow());
    println!("Usage:");
    println!(
        "  {} [event_file|-] [request_id]",
        "madai-chat-relay".bold().green()
    );
    println!("\nArguments:");
    println!(
        "  {}  HTTP event JSON to handle; stdin when '-' or omitted.",
        "<event_file>".bold().cyan()
    );
    println!(
        "  {}  Id echoed back in the reply; a random UUID when omitted.",
        "<request_id>".bold().magenta()
    );
    println!(
        "  {}     Display this help message.",
        "-h, -help".bold().blue()
    );
    println!("\nEnvironment:");
    println!("  {}      Upstream chat completion URL.", "CUSTOM_GPT_URL".bold());
    println!("  {}  Bearer token for the upstream API.", "CUSTOM_GPT_API_KEY".bold());
    println!("  {}            Log filter, e.g. 'debug'.", "RUST_LOG".bold());
    println!("\nExamples:");
    println!(
        "  {} event.json",
        "madai-chat-relay".bold().green()
    );
    println!(
        "  echo '{{\"httpMethod\":\"POST\",\"body\":\"{{\\\"message\\\":\\\"hi\\\"}}\"}}' | {} - req-1",
        "madai-chat-relay".bold().green()
    );
    println!("{:━^60}", "".yellow());
}
