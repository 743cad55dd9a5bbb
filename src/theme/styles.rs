//! Global CSS styles for the GameStore storefront.
//!
//! Dark arcade palette: deep navy backgrounds, violet primary, cyan
//! secondary and a hot pink accent for discounts.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg: #0b0d1a;
  --bg-muted: #11142a;
  --bg-card: #161a33;
  --border: #262b4d;

  /* Brand */
  --primary: #8b5cf6;
  --primary-glow: rgba(139, 92, 246, 0.35);
  --secondary: #22d3ee;
  --secondary-glow: rgba(34, 211, 238, 0.3);
  --accent: #f43f5e;

  /* Text */
  --text-primary: #f5f5fa;
  --text-secondary: rgba(245, 245, 250, 0.72);
  --text-muted: rgba(245, 245, 250, 0.5);

  /* Semantic */
  --danger: #ef4444;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  --radius: 12px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Layout === */
.container {
  max-width: 1100px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.container.narrow {
  max-width: 760px;
}

.centered {
  text-align: center;
}

.muted-bg {
  background: var(--bg-muted);
}

section {
  padding: 4rem 0;
}

.section-title {
  font-size: var(--text-2xl);
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.section-subtitle {
  color: var(--text-secondary);
  margin-bottom: 2rem;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  border: 1px solid transparent;
  border-radius: 8px;
  font-family: var(--font-sans);
  font-weight: 600;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-sm { padding: 0.375rem 0.75rem; font-size: var(--text-sm); }
.btn-md { padding: 0.5rem 1rem; font-size: var(--text-base); }
.btn-lg { padding: 0.75rem 1.75rem; font-size: var(--text-lg); }

.btn.wide {
  width: 100%;
}

.btn-primary {
  background: var(--primary);
  color: var(--text-primary);
}

.btn-primary:hover:not(:disabled) {
  box-shadow: 0 0 20px var(--primary-glow);
  transform: translateY(-1px);
}

.btn-secondary {
  background: var(--secondary);
  color: var(--bg);
}

.btn-secondary:hover:not(:disabled) {
  box-shadow: 0 0 20px var(--secondary-glow);
}

.btn-outline {
  background: transparent;
  border-color: var(--border);
  color: var(--text-primary);
}

.btn-outline:hover:not(:disabled) {
  border-color: var(--primary);
}

.btn-ghost {
  background: transparent;
  color: var(--text-secondary);
}

.btn-ghost:hover:not(:disabled) {
  color: var(--text-primary);
}

.icon-btn {
  background: transparent;
  border: none;
  color: var(--text-muted);
  font-size: var(--text-lg);
  cursor: pointer;
  padding: 0.25rem;
  transition: color var(--transition-fast);
}

.icon-btn:hover {
  color: var(--danger);
}

.close-btn:hover {
  color: var(--text-primary);
}

/* === Badges === */
.badge {
  display: inline-flex;
  align-items: center;
  padding: 0.125rem 0.625rem;
  border-radius: 999px;
  font-size: var(--text-xs);
  font-weight: 700;
}

.badge-primary { background: var(--primary); color: var(--text-primary); }
.badge-secondary { background: var(--secondary); color: var(--bg); }
.badge-accent { background: var(--accent); color: var(--text-primary); }

.badge.glow {
  box-shadow: 0 0 24px var(--secondary-glow);
  margin-bottom: 1.25rem;
}

/* === Input Fields === */
.input-field {
  width: 100%;
  padding: 0.5rem 0.75rem;
  background: var(--bg);
  border: 1px solid var(--border);
  border-radius: 8px;
  color: var(--text-primary);
  font-family: var(--font-mono);
  font-size: var(--text-base);
  transition: border-color var(--transition-fast);
}

.input-field::placeholder {
  color: var(--text-muted);
}

.input-field:focus {
  outline: none;
  border-color: var(--primary);
  box-shadow: 0 0 0 1px var(--primary);
}

/* === Category Pills === */
.category-pills {
  display: flex;
  gap: 0.5rem;
  flex-wrap: wrap;
  margin-bottom: 2rem;
}

.pill {
  padding: 0.375rem 1rem;
  border: 1px solid var(--border);
  border-radius: 999px;
  background: transparent;
  color: var(--text-secondary);
  font-size: var(--text-sm);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.pill:hover {
  border-color: var(--primary);
  color: var(--text-primary);
}

.pill.selected {
  background: var(--primary);
  border-color: var(--primary);
  color: var(--text-primary);
}

/* === Navigation Header === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 40;
  background: rgba(11, 13, 26, 0.85);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--border);
}

.nav-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: 64px;
}

.nav-brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.nav-logo {
  font-size: var(--text-xl);
}

.nav-title {
  font-size: var(--text-xl);
  font-weight: 800;
  background: linear-gradient(90deg, var(--primary), var(--secondary));
  -webkit-background-clip: text;
  color: transparent;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 1.5rem;
}

.nav-link {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--text-primary);
}

.cart-button {
  position: relative;
}

.cart-count {
  position: absolute;
  top: -0.5rem;
  right: -0.5rem;
}

/* === Hero === */
.hero {
  position: relative;
  overflow: hidden;
  padding: 6rem 0;
  text-align: center;
}

.hero-glow {
  position: absolute;
  inset: 0;
  background: radial-gradient(circle at 50% 0%, var(--primary-glow), transparent 60%);
  pointer-events: none;
}

.hero-content {
  position: relative;
}

.hero-title {
  font-size: var(--text-3xl);
  font-weight: 800;
  margin-bottom: 1rem;
}

.hero-tagline {
  max-width: 560px;
  margin: 0 auto 2rem;
  color: var(--text-secondary);
  font-size: var(--text-lg);
}

.hero-actions {
  display: flex;
  justify-content: center;
  gap: 1rem;
  flex-wrap: wrap;
}

/* === Catalog === */
.product-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 1.5rem;
}

.product-card {
  position: relative;
  display: flex;
  flex-direction: column;
  padding: 1.5rem;
  background: var(--bg-card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  transition: all var(--transition-normal);
}

.product-card:hover {
  border-color: var(--primary);
  box-shadow: 0 8px 32px var(--primary-glow);
  transform: translateY(-2px);
}

.product-discount {
  position: absolute;
  top: 1rem;
  right: 1rem;
}

.product-glyph {
  font-size: 3rem;
  margin-bottom: 1rem;
}

.product-name {
  font-size: var(--text-lg);
  font-weight: 700;
}

.product-description {
  flex: 1;
  color: var(--text-secondary);
  font-size: var(--text-sm);
  margin: 0.25rem 0 1.25rem;
}

.product-footer {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.product-price {
  display: flex;
  align-items: baseline;
  gap: 0.5rem;
}

.price-now {
  font-size: var(--text-xl);
  font-weight: 800;
}

.price-was {
  color: var(--text-muted);
  font-size: var(--text-sm);
  text-decoration: line-through;
}

.catalog-empty {
  color: var(--text-muted);
  text-align: center;
  padding: 2rem 0;
}

/* === Promo Showcase === */
.promo-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1.5rem;
}

.promo-card {
  padding: 1.5rem;
  background: var(--bg-card);
  border: 1px dashed var(--border);
  border-radius: var(--radius);
  text-align: center;
}

.promo-card.featured {
  border: 1px solid var(--accent);
  box-shadow: 0 0 28px rgba(244, 63, 94, 0.25);
}

.promo-glyph {
  font-size: var(--text-2xl);
  margin-bottom: 0.5rem;
}

.promo-code {
  display: inline-block;
  padding: 0.25rem 0.75rem;
  margin-bottom: 0.5rem;
  background: var(--bg);
  border-radius: 6px;
  color: var(--secondary);
  font-family: var(--font-mono);
  font-size: var(--text-lg);
  letter-spacing: 0.08em;
}

.promo-blurb {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

/* === FAQ === */
.faq-list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  margin-top: 2rem;
}

.faq-item {
  background: var(--bg-card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
}

.faq-item.open {
  border-color: var(--primary);
}

.faq-question {
  display: flex;
  align-items: center;
  justify-content: space-between;
  width: 100%;
  padding: 1rem 1.25rem;
  background: transparent;
  border: none;
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  font-weight: 600;
  text-align: left;
  cursor: pointer;
}

.faq-chevron {
  color: var(--text-muted);
}

.faq-answer {
  padding: 0 1.25rem 1rem;
  color: var(--text-secondary);
}

/* === Support === */
.support-glyph {
  font-size: var(--text-3xl);
  margin-bottom: 1rem;
}

.support-actions {
  display: flex;
  justify-content: center;
  gap: 1rem;
  flex-wrap: wrap;
}

/* === Footer === */
.footer {
  padding: 2rem 0;
  border-top: 1px solid var(--border);
  color: var(--text-muted);
  font-size: var(--text-sm);
  text-align: center;
}

/* === Cart Drawer === */
.drawer-backdrop {
  position: fixed;
  inset: 0;
  z-index: 50;
  background: rgba(0, 0, 0, 0.6);
}

.cart-drawer {
  position: fixed;
  top: 0;
  right: 0;
  bottom: 0;
  z-index: 51;
  display: flex;
  flex-direction: column;
  width: min(420px, 100vw);
  background: var(--bg-muted);
  border-left: 1px solid var(--border);
  animation: drawer-in var(--transition-normal);
}

@keyframes drawer-in {
  from { transform: translateX(100%); }
  to { transform: translateX(0); }
}

.drawer-header {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  padding: 1.5rem;
  border-bottom: 1px solid var(--border);
}

.drawer-title {
  font-size: var(--text-xl);
  font-weight: 700;
}

.drawer-subtitle {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.drawer-body {
  flex: 1;
  overflow-y: auto;
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.cart-empty {
  color: var(--text-muted);
  text-align: center;
  padding: 3rem 0;
}

.cart-line {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem;
  background: var(--bg-card);
  border-radius: 8px;
}

.cart-line-info,
.cart-line-actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.cart-line-glyph {
  font-size: var(--text-xl);
}

.cart-line-name {
  font-weight: 600;
}

.cart-line-qty {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.cart-line-price {
  font-weight: 700;
}

.cart-summary {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  margin-top: 1rem;
  padding-top: 1rem;
  border-top: 1px solid var(--border);
}

.promo-form {
  display: flex;
  gap: 0.5rem;
}

.promo-form .form-field {
  flex: 1;
}

.promo-active {
  align-self: flex-start;
}

.cart-total {
  display: flex;
  justify-content: space-between;
  font-size: var(--text-lg);
  font-weight: 700;
}

.cart-total-amount {
  color: var(--secondary);
}

/* === Toasts === */
.toast-stack {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  z-index: 60;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  width: 320px;
}

.toast {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: 0.75rem;
  padding: 0.875rem 1rem;
  background: var(--bg-card);
  border: 1px solid var(--border);
  border-left: 3px solid var(--primary);
  border-radius: 8px;
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
  animation: toast-in var(--transition-normal);
}

.toast.destructive {
  border-left-color: var(--danger);
}

@keyframes toast-in {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: translateY(0); }
}

.toast-title {
  font-weight: 700;
  font-size: var(--text-sm);
}

.toast-description {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}
"#;
