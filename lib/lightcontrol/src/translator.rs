use log::{debug, error, info, warn};
use transport::{Response, Switch, Target, Used};

use crate::settings::{SettingKey, Settings};
use crate::{inject_pwm, Command, Error, LineSender, LightState, Result};

/// Turns light commands into printer command lines.
///
/// The translator owns the assumed light state. It never learns the real
/// state from the printer, it only remembers what it last asked for.
pub struct CommandTranslator<S, L> {
    settings: S,
    sender: Option<L>,
    state: LightState,
}

impl<S: Settings, L: LineSender> CommandTranslator<S, L> {
    /// `sender` is `None` when no printer interface is available; commands
    /// still update the assumed state but nothing is sent.
    pub fn new(settings: S, sender: Option<L>) -> Self {
        Self {
            settings,
            sender,
            state: LightState::Unknown,
        }
    }

    pub fn state(&self) -> LightState {
        self.state
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut S {
        &mut self.settings
    }

    /// Logs the configured templates and fires one status query. The
    /// outcome of the query is not used.
    pub fn start(&mut self) {
        info!(
            "light control loaded. on={:?} off={:?} toggle={:?}",
            self.settings.get(SettingKey::GcodeOn),
            self.settings.get(SettingKey::GcodeOff),
            self.settings.get(SettingKey::GcodeToggle),
        );

        debug!("sending initial status query");
        let _ = self.query_status();
    }

    pub fn execute(&mut self, command: Command) -> Result<Response> {
        debug!("executing {command:?}");

        match command {
            Command::Toggle { target, pwm } => self.handle_toggle(&target, pwm),
            Command::SetState { state, pwm } => Ok(self.switch(state, pwm)),
            Command::QueryStatus => {
                let (attempted, state) = self.query_status();
                Ok(Response::status(attempted, state.is_on()))
            }
        }
    }

    pub fn handle_toggle(&mut self, target: &str, pwm: Option<u8>) -> Result<Response> {
        let target = target
            .parse::<Target>()
            .map_err(|_| Error::BadTarget(target.to_string()))?;

        match target {
            Target::Toggle => {
                let toggle = self.settings.get(SettingKey::GcodeToggle);

                if toggle.trim().is_empty() {
                    let next = Switch::from(self.state != LightState::On);
                    return Ok(self.switch(next, pwm));
                }

                self.send_lines([toggle]);
                self.state = self.state.inverted();

                Ok(Response::toggled(self.state.is_on()))
            }
            Target::On => Ok(self.switch(Switch::On, pwm)),
            Target::Off => Ok(self.switch(Switch::Off, pwm)),
        }
    }

    pub fn handle_set(&mut self, state: &str, pwm: Option<u8>) -> Result<Response> {
        let state = state
            .parse::<Switch>()
            .map_err(|_| Error::UnknownState(state.to_string()))?;

        Ok(self.switch(state, pwm))
    }

    fn switch(&mut self, state: Switch, pwm: Option<u8>) -> Response {
        let line = match state {
            Switch::On => {
                let template = self.settings.get(SettingKey::GcodeOn);
                let template = template.trim();

                match pwm {
                    Some(pwm) => inject_pwm(template, pwm),
                    None => template.to_string(),
                }
            }
            Switch::Off => self.settings.get(SettingKey::GcodeOff).trim().to_string(),
        };

        self.send_lines([line.as_str()]);
        self.state = LightState::from(state);

        Response::switched(state.is_on(), Used::from(state), line)
    }

    /// Sends the configured status query, if any. Replies are not read, so
    /// the returned state is always the assumed one.
    pub fn query_status(&mut self) -> (bool, LightState) {
        let query = self.settings.get(SettingKey::StatusQuery);
        let query = query.trim();

        if query.is_empty() {
            return (false, self.state);
        }

        let token = self.settings.get(SettingKey::StatusParseToken);

        self.send_lines([query]);
        info!(
            "sent status query {query:?}, replies are not parsed (status_parse_token={:?})",
            token.trim()
        );

        (true, self.state)
    }

    /// Sends every non-blank line. Failures are logged and skipped.
    pub fn send_lines<I, T>(&mut self, lines: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let sender = match self.sender.as_mut() {
            Some(sender) => sender,
            None => {
                warn!("no printer interface available to send G-code");
                return;
            }
        };

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }

            debug!("sending G-code: {line}");

            if let Err(err) = sender.send_line(line) {
                error!("failed to send G-code {line:?}: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sender::MockLineSender;
    use crate::MemorySettings;

    use serde_json::json;

    #[derive(Default)]
    struct Recorder {
        lines: Vec<String>,
    }

    impl LineSender for Recorder {
        fn send_line(&mut self, line: &str) -> std::result::Result<(), crate::ErasedError> {
            self.lines.push(line.to_string());
            Ok(())
        }
    }

    fn translator(settings: MemorySettings) -> CommandTranslator<MemorySettings, Recorder> {
        CommandTranslator::new(settings, Some(Recorder::default()))
    }

    fn sent(translator: &CommandTranslator<MemorySettings, Recorder>) -> &[String] {
        &translator.sender.as_ref().unwrap().lines
    }

    #[test]
    fn test_set_on_appends_pwm() {
        let mut translator = translator(MemorySettings::new());

        let response = translator.handle_set("on", Some(128)).unwrap();

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({ "ok": true, "is_on": true, "used": "on", "sent": "M355 S1 P128" })
        );
        assert_eq!(sent(&translator), ["M355 S1 P128"]);
        assert_eq!(translator.state(), LightState::On);
    }

    #[test]
    fn test_set_on_replaces_token() {
        let settings = MemorySettings::new().with(SettingKey::GcodeOn, "  M355 S1 P{P}  ");
        let mut translator = translator(settings);

        let response = translator.handle_set("on", Some(64)).unwrap();

        assert_eq!(
            response,
            Response::switched(true, Used::On, "M355 S1 P64".to_string())
        );
        assert_eq!(sent(&translator), ["M355 S1 P64"]);
    }

    #[test]
    fn test_set_on_without_pwm_sends_template() {
        let settings = MemorySettings::new().with(SettingKey::GcodeOn, "M355 S1 P{p}");
        let mut translator = translator(settings);

        translator.handle_set("on", None).unwrap();

        assert_eq!(sent(&translator), ["M355 S1 P{p}"]);
    }

    #[test]
    fn test_set_off_always_turns_off() {
        for initial in [LightState::On, LightState::Off, LightState::Unknown] {
            let mut translator = translator(MemorySettings::new());
            translator.state = initial;

            let response = translator.handle_set("off", Some(200)).unwrap();

            assert_eq!(
                response,
                Response::switched(false, Used::Off, "M355 S0".to_string())
            );
            assert_eq!(translator.state(), LightState::Off);
            assert_eq!(sent(&translator), ["M355 S0"]);
        }
    }

    #[test]
    fn test_set_unknown_state() {
        let mut translator = translator(MemorySettings::new());
        translator.state = LightState::On;

        assert_eq!(
            translator.handle_set("bogus", None),
            Err(Error::UnknownState("bogus".to_string()))
        );
        assert_eq!(
            translator.handle_set("ON", None),
            Err(Error::UnknownState("ON".to_string()))
        );
        assert_eq!(translator.state(), LightState::On);
        assert!(sent(&translator).is_empty());
    }

    #[test]
    fn test_toggle_without_toggle_template() {
        let mut translator = translator(MemorySettings::new());
        translator.state = LightState::On;

        let response = translator.handle_toggle("toggle", Some(10)).unwrap();

        assert_eq!(
            response,
            Response::switched(false, Used::Off, "M355 S0".to_string())
        );
        assert_eq!(translator.state(), LightState::Off);

        let response = translator.handle_toggle("toggle", Some(10)).unwrap();

        assert_eq!(
            response,
            Response::switched(true, Used::On, "M355 S1 P10".to_string())
        );
        assert_eq!(sent(&translator), ["M355 S0", "M355 S1 P10"]);
    }

    #[test]
    fn test_toggle_from_unknown_turns_on() {
        let mut translator = translator(MemorySettings::new());

        translator.handle_toggle("toggle", None).unwrap();

        assert_eq!(translator.state(), LightState::On);
        assert_eq!(sent(&translator), ["M355 S1"]);
    }

    #[test]
    fn test_raw_toggle() {
        let settings = MemorySettings::new().with(SettingKey::GcodeToggle, " M355 ");
        let mut translator = translator(settings);

        let response = translator.handle_toggle("toggle", Some(50)).unwrap();

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({ "ok": true, "assumed_is_on": null, "used": "toggle" })
        );
        assert_eq!(translator.state(), LightState::Unknown);

        translator.state = LightState::On;
        let response = translator.handle_toggle("toggle", None).unwrap();

        assert_eq!(response, Response::toggled(Some(false)));
        assert_eq!(translator.state(), LightState::Off);

        let response = translator.handle_toggle("toggle", None).unwrap();

        assert_eq!(response, Response::toggled(Some(true)));
        assert_eq!(sent(&translator), ["M355", "M355", "M355"]);
    }

    #[test]
    fn test_toggle_explicit_target() {
        let mut translator = translator(MemorySettings::new());

        let response = translator.handle_toggle("on", Some(255)).unwrap();
        assert_eq!(
            response,
            Response::switched(true, Used::On, "M355 S1 P255".to_string())
        );

        let response = translator.handle_toggle("off", None).unwrap();
        assert_eq!(
            response,
            Response::switched(false, Used::Off, "M355 S0".to_string())
        );
    }

    #[test]
    fn test_toggle_bad_target() {
        let mut translator = translator(MemorySettings::new());

        assert_eq!(
            translator.handle_toggle("blink", None),
            Err(Error::BadTarget("blink".to_string()))
        );
        assert_eq!(translator.state(), LightState::Unknown);
        assert!(sent(&translator).is_empty());
    }

    #[test]
    fn test_toggle_target_is_exact() {
        let mut translator = translator(MemorySettings::new());

        for target in ["ON", "Off", " toggle", "toggle "] {
            assert_eq!(
                translator.handle_toggle(target, None),
                Err(Error::BadTarget(target.to_string()))
            );
        }
        assert_eq!(translator.state(), LightState::Unknown);
        assert!(sent(&translator).is_empty());
    }

    #[test]
    fn test_query_status_without_query() {
        let mut translator = translator(MemorySettings::new());
        translator.state = LightState::Off;

        assert_eq!(translator.query_status(), (false, LightState::Off));
        assert!(sent(&translator).is_empty());
    }

    #[test]
    fn test_query_status_sends_query() {
        let settings = MemorySettings::new()
            .with(SettingKey::StatusQuery, " M355 ")
            .with(SettingKey::StatusParseToken, "Case light:");
        let mut translator = translator(settings);
        translator.state = LightState::On;

        assert_eq!(translator.query_status(), (true, LightState::On));
        assert_eq!(sent(&translator), ["M355"]);
    }

    #[test]
    fn test_execute() {
        let settings = MemorySettings::new().with(SettingKey::StatusQuery, "M355");
        let mut translator = translator(settings);

        let response = translator
            .execute(Command::SetState {
                state: Switch::On,
                pwm: Some(1),
            })
            .unwrap();
        assert_eq!(
            response,
            Response::switched(true, Used::On, "M355 S1 P1".to_string())
        );

        let response = translator.execute(Command::QueryStatus).unwrap();
        assert_eq!(response, Response::status(true, Some(true)));

        let response = translator.execute(Command::Toggle {
            target: "sideways".to_string(),
            pwm: None,
        });
        assert_eq!(response, Err(Error::BadTarget("sideways".to_string())));
    }

    #[test]
    fn test_start_sends_status_query() {
        let settings = MemorySettings::new().with(SettingKey::StatusQuery, "M355");
        let mut translator = translator(settings);

        translator.start();

        assert_eq!(sent(&translator), ["M355"]);
        assert_eq!(translator.state(), LightState::Unknown);
    }

    #[test]
    fn test_blank_lines_never_reach_sender() {
        let mut sender = MockLineSender::new();
        sender.expect_send_line().never();

        let settings = MemorySettings::new()
            .with(SettingKey::GcodeOff, "   ")
            .with(SettingKey::GcodeToggle, "");
        let mut translator = CommandTranslator::new(settings, Some(sender));
        translator.state = LightState::On;

        let response = translator.handle_set("off", None).unwrap();

        assert_eq!(
            response,
            Response::switched(false, Used::Off, String::new())
        );
        assert_eq!(translator.state(), LightState::Off);

        translator.send_lines(["", " \t "]);
    }

    #[test]
    fn test_send_failure_does_not_stop_remaining_lines() {
        let mut sender = MockLineSender::new();
        sender
            .expect_send_line()
            .withf(|line| line == "M355 S1")
            .times(1)
            .returning(|_| Err("printer disconnected".into()));
        sender
            .expect_send_line()
            .withf(|line| line == "M355 S0")
            .times(1)
            .returning(|_| Ok(()));

        let mut translator = CommandTranslator::new(MemorySettings::new(), Some(sender));

        translator.send_lines(["M355 S1", "", "M355 S0"]);
    }

    #[test]
    fn test_failed_send_still_updates_state() {
        let mut sender = MockLineSender::new();
        sender
            .expect_send_line()
            .returning(|_| Err("printer disconnected".into()));

        let mut translator = CommandTranslator::new(MemorySettings::new(), Some(sender));

        let response = translator.handle_set("on", None).unwrap();

        assert!(response.is_ok());
        assert_eq!(translator.state(), LightState::On);
    }

    #[test]
    fn test_missing_sender() {
        let mut translator: CommandTranslator<_, Recorder> =
            CommandTranslator::new(MemorySettings::new(), None);

        let response = translator.handle_toggle("on", None).unwrap();

        assert_eq!(
            response,
            Response::switched(true, Used::On, "M355 S1".to_string())
        );
        assert_eq!(translator.state(), LightState::On);
    }
}
