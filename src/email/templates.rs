pub fn render_recover_code(code: &str) -> String {
    format!(
        r#"<html>
<body style="font-family: sans-serif; color: #222;">
  <h2>Recuperação de senha</h2>
  <p>Use o código abaixo para redefinir a sua senha:</p>
  <p style="font-size: 24px; font-weight: bold; letter-spacing: 4px;">{code}</p>
  <p>Se você não solicitou a recuperação, ignore este e-mail.</p>
</body>
</html>"#
    )
}
