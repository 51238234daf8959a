use std::sync::mpsc::{channel, Receiver, Sender};

use anyhow::Result;
use lettre::{
    message::MessageBuilder, transport::smtp::authentication::Credentials, Message, SmtpTransport,
    Transport,
};
use tokio_util::sync::CancellationToken;

pub struct Mailer {
    message_builder: MessageBuilder,
    smtp_transport: SmtpTransport,
    channel_receiver: Receiver<MailPayload>,
}

impl Mailer {
    pub fn new(
        smtp_host: &str,
        smtp_username: &str,
        smtp_password: &str,
        sender_name: &str,
        sender_email: &str,
    ) -> (Self, Sender<MailPayload>) {
        tb_log::info(Some("⚡"), "Mailer: Initializing component");

        let (sender, receiver) = channel::<MailPayload>();

        let message_builder = match format!("{sender_name} <{sender_email}>").parse() {
            Ok(mailbox) => Message::builder().from(mailbox),
            Err(err) => panic!("Invalid mailer sender: {err}"),
        };

        let smtp_transport = match SmtpTransport::relay(smtp_host) {
            Ok(relay) => relay
                .credentials(Credentials::new(
                    smtp_username.to_owned(),
                    smtp_password.to_owned(),
                ))
                .build(),
            Err(err) => panic!("Invalid smtp host: {err}"),
        };

        (
            Self {
                message_builder,
                smtp_transport,
                channel_receiver: receiver,
            },
            sender,
        )
    }

    pub async fn run(self, cancel_token: CancellationToken) -> Result<()> {
        tb_log::info(Some("💫"), "Mailer: Running component");

        let message_builder = self.message_builder;
        let smtp_transport = self.smtp_transport;
        let channel_receiver = self.channel_receiver;

        let worker = tokio::task::spawn_blocking(move || {
            while let Ok(payload) = channel_receiver.recv() {
                let mailbox = match payload.to.parse() {
                    Ok(mailbox) => mailbox,
                    Err(err) => {
                        tb_log::error(None, format!("Mailer: Invalid recipient address: {err}"));
                        continue;
                    }
                };

                let message = match message_builder
                    .to_owned()
                    .to(mailbox)
                    .subject(payload.subject)
                    .body(payload.body)
                {
                    Ok(message) => message,
                    Err(err) => {
                        tb_log::error(None, format!("Mailer: Failed to build message: {err}"));
                        continue;
                    }
                };

                if let Err(err) = smtp_transport.send(&message) {
                    tb_log::error(None, format!("Mailer: Failed to send message: {err}"));
                }
            }
        });

        tokio::select! {
            _ = cancel_token.cancelled() => (),
            res = worker => res?,
        }

        tb_log::info(None, "Mailer: Shutting down component");

        Ok(())
    }

    pub async fn run_none() -> Result<()> {
        Ok(())
    }
}

pub struct MailPayload {
    to: String,
    subject: String,
    body: String,
}

impl MailPayload {
    pub fn new(to: &str, subject: &str, body: &str) -> Self {
        Self {
            to: to.to_owned(),
            subject: subject.to_owned(),
            body: body.to_owned(),
        }
    }
}
