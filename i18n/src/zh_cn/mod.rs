// 导航栏
pub const NAV: &str = r#"
brand = Pong Arena
home = 首页
friends = 好友
profile = 个人资料
login = 登录
register = 注册
logout = 退出登录
logged_out = 已退出登录。
"#;

pub const FOOTER: &str = r#"
terms = 服务条款
privacy = 隐私政策
rights = © { $year } Transcendence
"#;

pub const HOME: &str = r#"
title = Transcendence · 来一局乒乓
how_to_play = 玩法
guest_rule_1 = 使用方向键上下移动球拍。
guest_rule_2 = 让球越过对手的球拍即可得分。
guest_rule_3 = 先达到比赛分数的一方获胜。
guest_hint = 参加锦标赛、邀请好友或使用社交功能需要先创建账号。
login = 登录
register = 注册
play_guest = 游客试玩
tournament_rules = 锦标赛规则
tournament_rule_1 = 锦标赛有时间限制，按照锦标赛页面显示的对阵表进行。
tournament_rule_2 = 比赛开始时进入比赛页面排队，系统会自动配对。
tournament_rule_3 = 遵守公平竞赛规则：禁止作弊，禁止多开账号。
game_rules = 游戏规则
game_rule_1 = 使用方向键控制你的球拍。
game_rule_2 = 比赛分为排位赛和娱乐赛，排位赛会影响排行榜积分。
game_rule_3 = 频繁掉线可能会受到处罚。
tournaments = 锦标赛
friends = 好友
play_ranked = 排位赛
play_casual = 娱乐赛
welcome = 欢迎回来，{ $name }！
"#;

// 登录组件
pub const LOGIN: &str = r#"
login_text = 欢迎回来
subtitle = 登录你的账号
email = 邮箱
password = 密码
twofa = 两步验证码（可选）
submit = 登录
contacting = 正在连接服务器…
success = 登录成功，正在跳转…
error = 未知错误
back_home = ← 返回首页
to_register_prefix = 还没有账号？
to_register = 立即注册
"#;

pub const REGISTER: &str = r#"
title = 创建账号
email = 邮箱
display_name = 昵称
password = 密码（至少8位）
re_password = 确认密码
submit = 注册
submitting = 正在创建账号…
strength = 密码强度：{ $level }/4
email_invalid = 邮箱格式不正确
name_required = 请填写昵称
pwd_too_short = 密码至少需要8位
pwd_not_match = 两次输入的密码不一致
success = 注册成功，正在跳转到登录页…
failed = 注册失败
to_login_prefix = 已有账号？
to_login = 登录
"#;

pub const FRIENDS: &str = r#"
title = 好友
requests = 好友请求
incoming = 收到的请求
outgoing = 发出的请求
no_incoming = 暂无收到的请求。
no_outgoing = 暂无发出的请求。
accept = 接受
reject = 拒绝
pending = { $name }（等待中）
cancel = 撤回
my_friends = 我的好友
no_friends = 还没有好友。
status_online = 状态：在线
status_offline = 状态：离线
remove = 删除好友
find_users = 查找用户
search_placeholder = 搜索用户...
loading = 加载中...
no_result = 没有找到用户。
record = 胜：{ $wins }，负：{ $losses }
already_friends = 已是好友
request_sent = 已发送请求
send_request = 添加好友
sent = 好友请求已发送！
accepted = 已接受好友请求！
rejected = 已拒绝好友请求！
cancelled = 已撤回好友请求！
removed = 已删除好友！
avatar = 头像
"#;

pub const PROFILE: &str = r#"
loading = 正在加载个人资料…
title = 个人资料
subtitle = 管理头像、个人信息并查看战绩。
avatar = 头像
avatar_preview = 头像预览
avatar_current = 当前头像
choose_avatar = 选择新头像
save_avatar = 保存头像
uploading = 上传中…
avatar_type = 只支持 JPEG 和 PNG 图片。
avatar_size = 图片必须小于 2MB。
avatar_uploaded = 头像上传成功。
avatar_failed = 头像上传失败。
stats = 战绩
wins = 胜
losses = 负
win_rate = 胜率
info = 个人信息
display_name = 昵称
email = 邮箱
bio = 简介
bio_placeholder = 介绍一下你自己…
save = 保存修改
saving = 保存中…
saved = 个人资料已更新。
save_failed = 个人资料更新失败。
twofa_title = 两步验证
twofa_loading = 正在加载两步验证状态...
twofa_enabled = 你的账号已开启两步验证。
twofa_intro = 开启两步验证，为你的账号多加一层保护。
twofa_setup = 开启两步验证
twofa_setting_up = 设置中...
twofa_scan = 使用验证器应用扫描二维码：
twofa_secret = 或手动输入密钥：
twofa_code = 输入验证码：
twofa_verify = 验证并开启
twofa_verifying = 验证中...
twofa_success = 两步验证已开启！
twofa_setup_failed = 两步验证设置失败。
twofa_invalid = 验证码无效。
delete = 注销账号
delete_title = 确认注销账号
delete_warning = 确定要注销账号吗？此操作无法撤销。
delete_cancel = 取消
delete_confirm = 确认注销
deleting = 注销中...
delete_failed = 注销失败
"#;

pub const TERMS: &str = r#"
title = 服务条款
intro = 欢迎来到 Transcendence。使用本站即表示你同意遵守以下规则：
rule_1 = 尊重其他玩家。
rule_2 = 禁止作弊或利用漏洞。
rule_3 = 禁止共享账号。
outro = 参加锦标赛和使用社交功能需要注册并登录。
"#;

pub const PRIVACY: &str = r#"
title = 隐私政策
collect = 本站只收集游戏和社交功能所需的最少数据。
store = 我们保存你的昵称、头像和游戏数据，登录凭证只保存在你的浏览器中。
contact = 如需删除数据，请联系我们。
"#;

pub const NOT_FOUND: &str = r#"
title = 页面不存在
hint = 你访问的页面不存在。
back_home = ← 返回首页
"#;
