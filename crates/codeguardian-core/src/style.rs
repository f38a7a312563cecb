//! Inline stylesheet shared by every page the site renders.

/// Stylesheet embedded in each page's `<head>`.
pub const STYLESHEET: &str = r"*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
:root{--bg:#0B1220;--text:#E6EDF7;--muted:#8FA3BF;--primary:#3DDC97;--primary-dark:#1FA971;--border:rgba(230,237,247,.08);--font:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,Helvetica,Arial,sans-serif}
body{font-family:var(--font);background:var(--bg);color:var(--text);line-height:1.6;-webkit-font-smoothing:antialiased}
a{color:inherit;text-decoration:none}
.container{min-height:100vh;display:flex;flex-direction:column;align-items:center;justify-content:center;padding:0 24px}
.main{flex:1;display:flex;flex-direction:column;align-items:center;justify-content:center;padding:80px 0;text-align:center;max-width:760px}
.title{font-size:56px;font-weight:800;line-height:1.1;letter-spacing:-1.5px;margin-bottom:24px}
.title a{color:var(--primary)}
.title a:hover,.title a:focus{text-decoration:underline}
.description{font-size:20px;color:var(--muted);line-height:1.7;margin-bottom:48px}
.cta-container{display:flex;flex-direction:column;align-items:center;gap:16px}
.cta-button{display:inline-flex;align-items:center;justify-content:center;padding:14px 32px;border-radius:50px;font-size:16px;font-weight:700;background:linear-gradient(135deg,var(--primary),var(--primary-dark));color:#06231A;box-shadow:0 4px 20px rgba(61,220,151,.25);transition:all .2s}
.cta-button:hover{box-shadow:0 8px 32px rgba(61,220,151,.4);transform:translateY(-2px)}
.subtle-text{font-size:14px;color:var(--muted)}
.footer{width:100%;border-top:1px solid var(--border);padding:24px 0;display:flex;justify-content:center;font-size:13px;color:var(--muted)}
.not-found code{background:rgba(230,237,247,.06);padding:2px 6px;border-radius:6px}
@media(max-width:600px){.title{font-size:36px}.description{font-size:17px}}
";
