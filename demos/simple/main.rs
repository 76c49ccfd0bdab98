//! A terminal walkthrough of the SDK integration steps: initialize with a public token, capture a
//! referral code, track a page view, track a conversion.
//!
//! Set `GOAFFPRO_PUBLIC_TOKEN` to pre-fill the token and `GOAFFPRO_API_URL` to point the client at
//! a different API host.

use std::io::{self, BufRead, Write};

use goaffpro::app::{ConversionTracker, PageViewTracker, ReferralForm, TokenForm, TokenFormState};
use goaffpro::ClientConfig;

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    let mut config = ClientConfig::new().event_logger(|event| {
        log::info!(target: "simple", event:serde; "delivered tracking event");
    });
    if let Ok(base_url) = std::env::var("GOAFFPRO_API_URL") {
        config = config.base_url(base_url);
    }
    let client = config.to_client();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut token_form = TokenForm::new();
    token_form.prefill(&client);
    if let Ok(token) = std::env::var("GOAFFPRO_PUBLIC_TOKEN") {
        token_form.set_public_token(&token);
    }

    println!("Step one: enter the public token to initialize the SDK.");
    while !token_form.is_initialized() {
        let prompt = if token_form.public_token().is_empty() {
            "public token> ".to_owned()
        } else {
            format!("public token [{}]> ", token_form.public_token())
        };
        let Some(input) = read_line(&mut lines, &prompt)? else {
            return Ok(());
        };
        if !input.is_empty() {
            token_form.set_public_token(&input);
        }
        if !token_form.can_submit() {
            continue;
        }

        println!("client.init(\"{}\")", token_form.public_token());
        token_form.submit(&client).await;
        match token_form.state() {
            TokenFormState::Initialized => println!("SDK initialized"),
            TokenFormState::Failed(err) => println!("initialization failed: {err}"),
            _ => {}
        }
    }

    let mut referral_form = ReferralForm::new();
    referral_form.load(&client).await;
    println!();
    println!("Step two: enter an affiliate's referral code (for testing purposes).");
    let Some(input) = read_line(&mut lines, "referral code> ")? else {
        return Ok(());
    };
    if !input.is_empty() {
        println!("client.set_referral_code(\"{input}\")");
        let _ = referral_form.set_code(&client, &input).await;
    }

    let mut page_view = PageViewTracker::new();
    println!();
    println!("Step three: press enter to track a page view.");
    if read_line(&mut lines, "track page view> ")?.is_none() {
        return Ok(());
    }
    println!("client.track_page_view()");
    page_view.track(&client).await;
    if let Some(text) = page_view.response_text() {
        println!("{text}");
    }

    let mut conversion = ConversionTracker::new();
    println!();
    println!("Step four: track a dummy order. You should see the sale recorded in your admin panel.");
    let number_prompt = format!("order number [{}]> ", conversion.number());
    let Some(input) = read_line(&mut lines, &number_prompt)? else {
        return Ok(());
    };
    if !input.is_empty() {
        conversion.set_number(&input);
    }
    let total_prompt = format!("order total [{}]> ", conversion.total());
    let Some(input) = read_line(&mut lines, &total_prompt)? else {
        return Ok(());
    };
    if !input.is_empty() {
        conversion.set_total(&input);
    }
    if !conversion.can_submit() {
        println!("order number and total are both required");
        return Ok(());
    }

    println!(
        "client.track_conversion({{\"number\": \"{}\", \"total\": \"{}\"}})",
        conversion.number(),
        conversion.total()
    );
    conversion.track(&client).await;
    if let Some(text) = conversion.response_text() {
        println!("{text}");
    }

    Ok(())
}

fn read_line(
    lines: &mut io::Lines<io::StdinLock<'_>>,
    prompt: &str,
) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim_end_matches('\r').to_owned())),
        None => Ok(None),
    }
}
