use super::{modem::describe_signal, modem_api};
use crate::config::Config;
use chrono::Local;
use clap::Subcommand;
use colored::Colorize;
use modem_client::ModemManagerAPI;
use std::time::Duration;
use tracing::debug;

#[derive(Subcommand, Debug)]
pub enum WatchCommands {
    /// Print the signal strength of a modem until interrupted
    Signal {
        /// Modem id
        id: String,
        /// Seconds between samples
        #[arg(short, long, default_value = "2", value_parser = parse_interval)]
        interval: Duration,
        /// Stop after this many samples
        #[arg(short = 'n', long)]
        count: Option<u32>,
    },
}

fn parse_interval(value: &str) -> Result<Duration, String> {
    let seconds: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number of seconds"))?;

    if !seconds.is_finite() || seconds < 0.1 {
        return Err(format!("interval must be at least 0.1 seconds, got '{value}'"));
    }

    Ok(Duration::from_secs_f64(seconds))
}

impl WatchCommands {
    pub async fn handle(self, config: &Config) -> anyhow::Result<()> {
        match self {
            WatchCommands::Signal {
                id,
                interval,
                count,
            } => {
                let api = modem_api(config)?;
                let ctrl_c = async {
                    if tokio::signal::ctrl_c().await.is_err() {
                        std::future::pending::<()>().await;
                    }
                };

                let samples = watch_signal(&api, &id, interval, count, ctrl_c).await;
                debug!("Stopped after {} samples", samples);
            }
        }

        Ok(())
    }
}

/// Polls the signal strength until `stop` resolves or `count` samples are taken.
/// `stop` also cancels a request in flight. Returns the number of samples.
async fn watch_signal<F>(
    api: &ModemManagerAPI,
    id: &str,
    interval: Duration,
    count: Option<u32>,
    stop: F,
) -> u32
where
    F: Future<Output = ()>,
{
    tokio::pin!(stop);
    let mut ticker = tokio::time::interval(interval);
    let mut samples = 0u32;

    loop {
        tokio::select! {
            _ = &mut stop => break,
            _ = ticker.tick() => {}
        }

        let now = Local::now().format("%H:%M:%S").to_string();
        tokio::select! {
            _ = &mut stop => break,
            result = api.fetch_signal_strength_by_id(id) => match result {
                Ok(signal) => println!("{} {}", now.dimmed(), describe_signal(&signal)),
                Err(err) => eprintln!("{} {}: {}", now.dimmed(), "Warning".yellow(), err),
            },
        }

        samples += 1;
        if count.is_some_and(|count| samples >= count) {
            break;
        }
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn signal_server(delay: Duration, expected_requests: u64) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1.0/modem/0b9c/signal"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "signal_strength": 20, "bit_error_rate": 99 }))
                    .set_delay(delay),
            )
            .expect(expected_requests)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_stop_cancels_request_in_flight() {
        let server = signal_server(Duration::from_millis(800), 1).await;
        let api = ModemManagerAPI::new(&server.uri()).unwrap();

        let stop = tokio::time::sleep(Duration::from_millis(300));
        let samples = tokio::time::timeout(
            Duration::from_secs(2),
            watch_signal(&api, "0b9c", Duration::from_millis(100), None, stop),
        )
        .await
        .expect("watch did not stop");

        assert_eq!(samples, 0);
    }

    #[tokio::test]
    async fn test_count_ends_polling() {
        let server = signal_server(Duration::ZERO, 3).await;
        let api = ModemManagerAPI::new(&server.uri()).unwrap();

        let samples = watch_signal(
            &api,
            "0b9c",
            Duration::from_millis(100),
            Some(3),
            std::future::pending(),
        )
        .await;

        assert_eq!(samples, 3);
    }

    #[rstest]
    #[case("2", Duration::from_secs(2))]
    #[case("0.5", Duration::from_millis(500))]
    fn test_parse_interval(#[case] input: &str, #[case] expected: Duration) {
        assert_eq!(parse_interval(input).unwrap(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("fast")]
    #[case("inf")]
    fn test_parse_interval_rejects(#[case] input: &str) {
        assert!(parse_interval(input).is_err());
    }
}
