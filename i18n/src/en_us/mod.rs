// navigation bar
pub const NAV: &str = r#"
brand = Pong Arena
home = Home
friends = Friends
profile = Profile
login = Login
register = Register
logout = Logout
logged_out = You have been logged out.
"#;

pub const FOOTER: &str = r#"
terms = Terms
privacy = Privacy
rights = © { $year } Transcendence
"#;

pub const HOME: &str = r#"
title = Transcendence · Play Pong
how_to_play = How to play
guest_rule_1 = Use the arrow keys to move your paddle up and down.
guest_rule_2 = Score points by making the ball pass your opponent's paddle.
guest_rule_3 = First to reach the match score wins the match.
guest_hint = To play tournaments, invite friends or use the social features you must create an account.
login = Login
register = Register
play_guest = Play as Guest
tournament_rules = Tournament rules
tournament_rule_1 = Tournaments are time-limited and follow the bracket displayed on the tournament page.
tournament_rule_2 = When your match is scheduled, join the match page to be queued and automatically paired.
tournament_rule_3 = Respect the fair play rules: no cheating, no multi-accounting.
game_rules = Game rules
game_rule_1 = Use the arrow keys to control your paddle.
game_rule_2 = Matches can be ranked or casual; ranked matches affect your leaderboard rating.
game_rule_3 = Disconnecting repeatedly may result in penalties.
tournaments = Tournaments
friends = Friends
play_ranked = Play Ranked
play_casual = Play Casual
welcome = Welcome back, { $name }!
"#;

// login component
pub const LOGIN: &str = r#"
login_text = Welcome Back
subtitle = Sign in to your account
email = Email
password = Password
twofa = 2FA code (optional)
submit = Login
contacting = Contacting API…
success = Login successful. Redirecting…
error = Unexpected error
back_home = ← Back home
to_register_prefix = Don't have an account?
to_register = REGISTER NOW
"#;

pub const REGISTER: &str = r#"
title = Create your account
email = Email
display_name = Display name
password = Password (at least 8 characters)
re_password = Repeat password
submit = Register
submitting = Creating account…
strength = Password strength: { $level }/4
email_invalid = Invalid email address
name_required = Display name is required
pwd_too_short = Password must contain at least 8 characters
pwd_not_match = Passwords do not match
success = Account created, redirecting to login…
failed = Registration failed
to_login_prefix = Already registered?
to_login = LOGIN
"#;

pub const FRIENDS: &str = r#"
title = Friends
requests = Friend Requests
incoming = Incoming
outgoing = Outgoing
no_incoming = No incoming requests.
no_outgoing = No outgoing requests.
accept = Accept
reject = Reject
pending = { $name } (Pending)
cancel = Cancel
my_friends = My Friends
no_friends = No friends yet.
status_online = Status: Online
status_offline = Status: Offline
remove = Remove Friend
find_users = Find Users
search_placeholder = Search users...
loading = Loading...
no_result = No users found.
record = Wins: { $wins }, Losses: { $losses }
already_friends = Already friends
request_sent = Request sent
send_request = Send Friend Request
sent = Friend request sent!
accepted = Request accepted!
rejected = Request rejected!
cancelled = Request cancelled!
removed = Friendship removed!
avatar = Avatar
"#;

pub const PROFILE: &str = r#"
loading = Loading profile…
title = Your Profile
subtitle = Manage your avatar, info, and view your stats.
avatar = Avatar
avatar_preview = Avatar preview
avatar_current = Current avatar
choose_avatar = Choose new avatar
save_avatar = Save avatar
uploading = Uploading…
avatar_type = Only JPEG and PNG images are allowed.
avatar_size = Image must be smaller than 2MB.
avatar_uploaded = Avatar uploaded successfully.
avatar_failed = Failed to upload avatar.
stats = Game Stats
wins = Wins
losses = Losses
win_rate = Win Rate
info = Profile Info
display_name = Display name
email = Email
bio = Bio
bio_placeholder = Tell us about yourself…
save = Save changes
saving = Saving…
saved = Profile updated successfully.
save_failed = Failed to update profile.
twofa_title = Two-Factor Authentication
twofa_loading = Loading 2FA status...
twofa_enabled = 2FA is enabled on your account.
twofa_intro = Add an extra layer of security to your account by enabling two-factor authentication.
twofa_setup = Setup 2FA
twofa_setting_up = Setting up...
twofa_scan = Scan this QR code with your authenticator app:
twofa_secret = Or enter this secret manually:
twofa_code = Enter verification code:
twofa_verify = Verify & Enable 2FA
twofa_verifying = Verifying...
twofa_success = 2FA enabled successfully!
twofa_setup_failed = Failed to setup 2FA.
twofa_invalid = Invalid 2FA code.
delete = Delete account
delete_title = Confirm Account Deletion
delete_warning = Are you sure you want to delete your account? This action cannot be undone.
delete_cancel = Cancel
delete_confirm = Confirm Delete
deleting = Deleting...
delete_failed = Delete failed
"#;

pub const TERMS: &str = r#"
title = Terms of Service
intro = Welcome to Transcendence. By using this site you agree to follow the rules:
rule_1 = Be respectful to other players.
rule_2 = No cheating or exploiting bugs.
rule_3 = Account sharing is prohibited.
outro = For tournament play and social features you must register and log in.
"#;

pub const PRIVACY: &str = r#"
title = Privacy Policy
collect = This site collects minimal data required for gameplay and social features.
store = We store your display name, avatar and gameplay data. Tokens are kept client-side.
contact = Contact the team for data removal requests.
"#;

pub const NOT_FOUND: &str = r#"
title = Page not found
hint = The page you are looking for does not exist.
back_home = ← Back home
"#;
