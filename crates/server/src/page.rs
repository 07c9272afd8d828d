//! The single dashboard page.

const GAUGE_SLOT: &str = "{{output_gauge}}";

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Sentiment Analysis</title>
<style>
  body { background: #1e1e1e; color: #f0f0f0; font-family: sans-serif; margin: 0; padding: 10px; }
  h1 { padding-left: 5px; }
  h4, p { padding-left: 10px; }
  #input_text { width: 30%; margin-left: 10px; }
  #output_div { position: relative; display: inline-block; }
  #output_div .spinner { display: none; position: absolute; top: 8px; right: 8px; width: 16px; height: 16px;
    border: 3px solid #888; border-top-color: transparent; border-radius: 50%; animation: spin 0.8s linear infinite; }
  #output_div.loading .spinner { display: block; }
  @keyframes spin { to { transform: rotate(360deg); } }
</style>
</head>
<body>
<h1>Sentiment Analysis</h1>
<br>
<div>
  <h4>Text sentiment analyzer</h4>
  <div>
    <p>Provide below a phrase or sentence(s) to generate sentiment score.</p>
    <input id="input_text" type="text" placeholder="Input text" value="" autocomplete="off">
  </div>
  <div>
    <div id="output_div">
      <div class="spinner" aria-label="Loading"></div>
      <div id="output_gauge">{{output_gauge}}</div>
    </div>
  </div>
  <br>
</div>
<script>
(function () {
  var input = document.getElementById("input_text");
  var gauge = document.getElementById("output_gauge");
  var loading = document.getElementById("output_div");
  var scheme = location.protocol === "https:" ? "wss://" : "ws://";
  var socket = null;
  var pending = null;

  function send(text) {
    socket.send(JSON.stringify({ type: "input_changed", payload: { text: text } }));
  }

  function connect() {
    socket = new WebSocket(scheme + location.host + "/ws");
    socket.addEventListener("open", function () {
      if (pending !== null) {
        send(pending);
        pending = null;
      }
    });
    socket.addEventListener("message", function (event) {
      var message = JSON.parse(event.data);
      if (message.type === "computing") {
        loading.classList.add("loading");
      } else if (message.type === "gauge_updated") {
        gauge.innerHTML = message.payload.svg;
        loading.classList.remove("loading");
      } else if (message.type === "error") {
        loading.classList.remove("loading");
        console.warn(message.payload.error.message);
      }
    });
    socket.addEventListener("close", function () {
      loading.classList.remove("loading");
      pending = input.value;
      setTimeout(connect, 1000);
    });
  }

  input.addEventListener("input", function () {
    if (socket !== null && socket.readyState === WebSocket.OPEN) {
      send(input.value);
    } else {
      pending = input.value;
    }
  });

  connect();
})();
</script>
</body>
</html>
"#;

/// Renders the page with the gauge for the current (empty) input already in place.
pub fn render_index(initial_gauge_svg: &str) -> String {
    TEMPLATE.replacen(GAUGE_SLOT, initial_gauge_svg, 1)
}
