use layer_types::api::v1::{
	MessagePart, PushNotification, Sender,
	announcements::{self, Announcement, SenderName},
};

use crate::{api, client::PlatformClient, error::Error, http::Transport};

impl<T: Transport> PlatformClient<T> {
	/// Sends an announcement to a list of recipient ids.
	///
	/// The announcement endpoint only addresses senders by display name;
	/// any user id set on `sender` is dropped from the payload.
	pub fn send_announcement(
		&self,
		sender: &Sender,
		recipients: &[String],
		parts: &[MessagePart],
		notification: Option<&PushNotification>,
	) -> Result<Announcement, Error> {
		api::v1::announcements::post(
			self,
			&announcements::Request {
				sender: SenderName(sender),
				recipients,
				parts,
				notification,
			},
		)
	}
}
